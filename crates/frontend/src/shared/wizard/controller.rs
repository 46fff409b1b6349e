//! Reactive handle over [`WizardState`].
//!
//! Built once by the wizard page and passed by value to the navigation
//! list and the action bar.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use contracts::shared::wizard::{ActionGate, StepChange, WizardState};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Async step action (continue or submit). `Err` keeps the wizard where it is.
pub type StepAction = Rc<dyn Fn() -> Pin<Box<dyn Future<Output = Result<(), String>>>>>;

/// Wrap an async closure as a [`StepAction`]
pub fn step_action<F, Fut>(f: F) -> StepAction
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    Rc::new(move || Box::pin(f()))
}

#[derive(Clone, Copy)]
pub struct WizardController {
    pub state: RwSignal<WizardState>,
    gate: RwSignal<ActionGate>,
    on_step_change: Option<Callback<usize>>,
}

impl WizardController {
    pub fn new(total_steps: usize) -> Self {
        Self::with_initial_step(total_steps, 0)
    }

    pub fn with_initial_step(total_steps: usize, initial_step: usize) -> Self {
        Self {
            state: RwSignal::new(WizardState::with_initial_step(total_steps, initial_step)),
            gate: RwSignal::new(ActionGate::default()),
            on_step_change: None,
        }
    }

    /// Called with the new step index after every actual transition
    pub fn on_step_change(mut self, callback: Callback<usize>) -> Self {
        self.on_step_change = Some(callback);
        self
    }

    fn notify(&self, change: Option<StepChange>) {
        if let Some(change) = change {
            log::debug!("wizard step {} -> {}", change.from, change.to);
            if let Some(callback) = self.on_step_change {
                callback.run(change.to);
            }
        }
    }

    pub fn current_step(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.current_step()))
    }

    pub fn go_to_step(&self, step: isize) {
        let change = self.state.try_update(|s| s.go_to_step(step)).flatten();
        self.notify(change);
    }

    pub fn next_step(&self) {
        let change = self.state.try_update(|s| s.next_step()).flatten();
        self.notify(change);
    }

    pub fn previous_step(&self) {
        let change = self.state.try_update(|s| s.previous_step()).flatten();
        self.notify(change);
    }

    pub fn mark_step_complete(&self, step: usize) {
        self.state.update(|s| s.mark_step_complete(step));
    }

    pub fn mark_step_incomplete(&self, step: usize) {
        self.state.update(|s| s.mark_step_incomplete(step));
    }

    pub fn reset(&self) {
        let change = self.state.try_update(|s| {
            let from = s.current_step();
            s.reset();
            (from != 0).then_some(StepChange { from, to: 0 })
        });
        self.notify(change.flatten());
    }

    pub fn busy(&self) -> Signal<bool> {
        let gate = self.gate;
        Signal::derive(move || gate.with(|g| g.is_busy()))
    }

    /// Run an async action with the action bar locked; a second call while
    /// one is running is ignored. `then` receives the action's outcome.
    pub fn run(&self, action: StepAction, then: impl FnOnce(Result<(), String>) + 'static) {
        let started = self.gate.try_update(|g| g.try_begin()).unwrap_or(false);
        if !started {
            return;
        }
        let gate = self.gate;
        spawn_local(async move {
            let result = action().await;
            gate.update(|g| g.finish());
            then(result);
        });
    }

    /// "Next": run the continuation and advance only if it succeeds
    pub fn continue_with(&self, action: Option<StepAction>) {
        let this = *self;
        match action {
            Some(action) => self.run(action, move |result| match result {
                Ok(()) => this.next_step(),
                Err(e) => log::debug!("wizard step not completed: {}", e),
            }),
            None => this.next_step(),
        }
    }

    /// "Submit" on the last step. The step counts as complete while the
    /// action runs and is unmarked again if it fails.
    pub fn submit_with(&self, action: StepAction) {
        if self.gate.with_untracked(|g| g.is_busy()) {
            return;
        }
        let Some(ticket) = self.state.try_update(|s| s.begin_submit()) else {
            return;
        };
        let state = self.state;
        self.run(action, move |result| {
            state.update(|s| s.settle_submit(ticket, result.is_ok()));
        });
    }
}
