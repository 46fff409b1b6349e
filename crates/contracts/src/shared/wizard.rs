//! Multi-step wizard controller
//!
//! Sequences a fixed number of ordered steps, tracks which of them are
//! completed and gates forward navigation. The controller never fails:
//! out-of-range requests are ignored and leave the state untouched.
//!
//! Navigation rules:
//! - `go_to_step(n)` moves only when `0 <= n < total_steps`
//! - `next_step()` marks the current step complete, then advances unless
//!   already on the last step
//! - `previous_step()` moves back unless on the first step and never
//!   changes completion
//! - a step is clickable in the navigation list when it is at or before the
//!   current step, or already completed
//!
//! Operations that actually move return a [`StepChange`] so the owner can
//! fire its on-change notification.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A transition that happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChange {
    pub from: usize,
    pub to: usize,
}

/// How a step is rendered in the navigation list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Current,
    Complete,
    /// Behind the current step but not marked complete
    Visited,
    Locked,
}

/// The primary button of the action bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Next,
    Submit,
}

/// Step marked complete when a submit started; see [`WizardState::begin_submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    step: usize,
    newly_marked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    current_step: usize,
    total_steps: usize,
    completed_steps: BTreeSet<usize>,
}

impl WizardState {
    /// A wizard always has at least one step
    pub fn new(total_steps: usize) -> Self {
        Self {
            current_step: 0,
            total_steps: total_steps.max(1),
            completed_steps: BTreeSet::new(),
        }
    }

    /// Start on a given step, clamped into range
    pub fn with_initial_step(total_steps: usize, initial_step: usize) -> Self {
        let mut state = Self::new(total_steps);
        state.current_step = initial_step.min(state.total_steps - 1);
        state
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed_steps
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.total_steps - 1
    }

    pub fn is_step_complete(&self, step: usize) -> bool {
        self.completed_steps.contains(&step)
    }

    fn in_range(&self, step: isize) -> bool {
        step >= 0 && (step as usize) < self.total_steps
    }

    /// Jump to any step in range. Signed so callers can pass computed offsets.
    pub fn go_to_step(&mut self, step: isize) -> Option<StepChange> {
        if !self.in_range(step) {
            return None;
        }
        let change = StepChange {
            from: self.current_step,
            to: step as usize,
        };
        self.current_step = change.to;
        Some(change)
    }

    /// Complete the current step and advance
    pub fn next_step(&mut self) -> Option<StepChange> {
        self.completed_steps.insert(self.current_step);
        if self.is_last_step() {
            return None;
        }
        self.go_to_step(self.current_step as isize + 1)
    }

    pub fn previous_step(&mut self) -> Option<StepChange> {
        if self.is_first_step() {
            return None;
        }
        self.go_to_step(self.current_step as isize - 1)
    }

    pub fn mark_step_complete(&mut self, step: usize) {
        if step < self.total_steps {
            self.completed_steps.insert(step);
        }
    }

    pub fn mark_step_incomplete(&mut self, step: usize) {
        self.completed_steps.remove(&step);
    }

    /// Users may revisit completed steps or anything up to the current one,
    /// never jump ahead into unvisited steps.
    pub fn is_step_clickable(&self, step: usize) -> bool {
        step < self.total_steps && (step <= self.current_step || self.is_step_complete(step))
    }

    pub fn step_status(&self, step: usize) -> StepStatus {
        if step == self.current_step {
            StepStatus::Current
        } else if self.is_step_complete(step) {
            StepStatus::Complete
        } else if step < self.current_step {
            StepStatus::Visited
        } else {
            StepStatus::Locked
        }
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.is_last_step() {
            PrimaryAction::Submit
        } else {
            PrimaryAction::Next
        }
    }

    pub fn can_go_previous(&self, busy: bool) -> bool {
        !busy && !self.is_first_step()
    }

    /// Share of completed steps, 0..=100
    pub fn progress_percent(&self) -> u8 {
        ((self.completed_steps.len() * 100) / self.total_steps) as u8
    }

    /// Back to the first step with nothing completed
    pub fn reset(&mut self) {
        self.current_step = 0;
        self.completed_steps.clear();
    }

    /// Mark the current step complete before the submit action runs. The
    /// action may reset the wizard; nothing is marked after it settles.
    pub fn begin_submit(&mut self) -> SubmitTicket {
        let step = self.current_step;
        let newly_marked = self.completed_steps.insert(step);
        SubmitTicket { step, newly_marked }
    }

    /// A failed submit takes back the completion added by `begin_submit`
    pub fn settle_submit(&mut self, ticket: SubmitTicket, succeeded: bool) {
        if !succeeded && ticket.newly_marked {
            self.completed_steps.remove(&ticket.step);
        }
    }
}

/// Guard against duplicate submission while an async action is pending.
///
/// The action bar calls `try_begin` on click and `finish` when the
/// continuation settles, whatever its outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionGate {
    busy: bool,
}

impl ActionGate {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns false when an action is already running
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_four_step_scenario() {
        let mut w = WizardState::new(4);
        assert_eq!(w.current_step(), 0);
        assert!(w.completed_steps().is_empty());
        assert!(w.is_first_step());

        assert_eq!(w.next_step(), Some(StepChange { from: 0, to: 1 }));
        assert_eq!(w.current_step(), 1);
        assert_eq!(w.completed_steps(), &set(&[0]));

        assert_eq!(w.go_to_step(5), None);
        assert_eq!(w.current_step(), 1);

        w.previous_step();
        assert_eq!(w.current_step(), 0);
        assert_eq!(w.completed_steps(), &set(&[0]));

        w.next_step();
        w.next_step();
        w.next_step();
        assert_eq!(w.current_step(), 3);
        assert_eq!(w.completed_steps(), &set(&[0, 1, 2]));
        assert!(w.is_last_step());

        assert_eq!(w.next_step(), None);
        assert_eq!(w.current_step(), 3);
        assert!(w.is_last_step());
    }

    #[test]
    fn test_go_to_step_out_of_range_is_ignored() {
        for total in 1..6usize {
            for start in 0..total {
                for n in -3..(total as isize + 3) {
                    let mut w = WizardState::with_initial_step(total, start);
                    let result = w.go_to_step(n);
                    if n < 0 || n >= total as isize {
                        assert_eq!(result, None);
                        assert_eq!(w.current_step(), start);
                    } else {
                        assert_eq!(result, Some(StepChange { from: start, to: n as usize }));
                        assert_eq!(w.current_step(), n as usize);
                    }
                }
            }
        }
    }

    #[test]
    fn test_next_step_at_last_keeps_completions() {
        let mut w = WizardState::new(3);
        w.mark_step_complete(0);
        w.go_to_step(2);
        w.next_step();
        assert_eq!(w.current_step(), 2);
        assert!(w.is_step_complete(0));
        assert!(w.is_step_complete(2));
    }

    #[test]
    fn test_next_step_marks_and_advances() {
        for total in 2..7usize {
            for k in 0..total - 1 {
                let mut w = WizardState::with_initial_step(total, k);
                w.next_step();
                assert!(w.is_step_complete(k));
                assert_eq!(w.current_step(), k + 1);
            }
        }
    }

    #[test]
    fn test_previous_step_at_first_is_noop() {
        let mut w = WizardState::new(4);
        w.mark_step_complete(1);
        assert_eq!(w.previous_step(), None);
        assert_eq!(w.current_step(), 0);
        assert_eq!(w.completed_steps(), &set(&[1]));
    }

    #[test]
    fn test_first_and_last_are_exclusive() {
        for total in 2..7usize {
            for step in 0..total {
                let w = WizardState::with_initial_step(total, step);
                assert!(!(w.is_first_step() && w.is_last_step()));
            }
        }
        let single = WizardState::new(1);
        assert!(single.is_first_step() && single.is_last_step());
        assert_eq!(single.primary_action(), PrimaryAction::Submit);
    }

    #[test]
    fn test_clickability() {
        for total in 1..6usize {
            for current in 0..total {
                for mask in 0..(1u32 << total) {
                    let mut w = WizardState::with_initial_step(total, current);
                    for s in 0..total {
                        if mask & (1 << s) != 0 {
                            w.mark_step_complete(s);
                        }
                    }
                    for j in 0..total {
                        let expected = j <= current || w.is_step_complete(j);
                        assert_eq!(w.is_step_clickable(j), expected);
                    }
                    assert!(!w.is_step_clickable(total));
                }
            }
        }
    }

    #[test]
    fn test_mark_incomplete_and_out_of_range() {
        let mut w = WizardState::new(3);
        w.mark_step_complete(7);
        assert!(w.completed_steps().is_empty());
        w.mark_step_complete(1);
        w.mark_step_incomplete(1);
        assert!(!w.is_step_complete(1));
        assert_eq!(w.current_step(), 0);
    }

    #[test]
    fn test_zero_steps_clamped() {
        let w = WizardState::new(0);
        assert_eq!(w.total_steps(), 1);
        let w = WizardState::with_initial_step(3, 9);
        assert_eq!(w.current_step(), 2);
    }

    #[test]
    fn test_step_status_and_progress() {
        let mut w = WizardState::new(4);
        w.next_step();
        w.next_step();
        w.mark_step_incomplete(0);
        assert_eq!(w.step_status(0), StepStatus::Visited);
        assert_eq!(w.step_status(1), StepStatus::Complete);
        assert_eq!(w.step_status(2), StepStatus::Current);
        assert_eq!(w.step_status(3), StepStatus::Locked);
        assert_eq!(w.progress_percent(), 25);
        w.reset();
        assert_eq!(w, WizardState::new(4));
    }

    #[test]
    fn test_action_bar_rules() {
        let mut w = WizardState::new(2);
        assert!(!w.can_go_previous(false));
        assert_eq!(w.primary_action(), PrimaryAction::Next);
        w.next_step();
        assert!(w.can_go_previous(false));
        assert!(!w.can_go_previous(true));
        assert_eq!(w.primary_action(), PrimaryAction::Submit);
    }

    #[test]
    fn test_action_gate_blocks_duplicates() {
        let mut gate = ActionGate::default();
        assert!(gate.try_begin());
        assert!(gate.is_busy());
        assert!(!gate.try_begin());
        gate.finish();
        assert!(gate.try_begin());
    }

    #[test]
    fn test_submit_then_reset_leaves_fresh_wizard() {
        let mut w = WizardState::new(4);
        w.next_step();
        w.next_step();
        w.next_step();
        let ticket = w.begin_submit();
        assert_eq!(w.progress_percent(), 100);

        // the submit action resets the wizard before it settles
        w.reset();
        w.settle_submit(ticket, true);
        assert_eq!(w, WizardState::new(4));
        assert_eq!(w.progress_percent(), 0);
    }

    #[test]
    fn test_failed_submit_rolls_back_completion() {
        let mut w = WizardState::with_initial_step(4, 3);
        w.mark_step_complete(0);
        let ticket = w.begin_submit();
        assert!(w.is_step_complete(3));
        w.settle_submit(ticket, false);
        assert!(!w.is_step_complete(3));
        assert_eq!(w.completed_steps(), &set(&[0]));
    }

    #[test]
    fn test_failed_submit_keeps_earlier_completion() {
        let mut w = WizardState::with_initial_step(2, 1);
        w.mark_step_complete(1);
        let ticket = w.begin_submit();
        w.settle_submit(ticket, false);
        assert!(w.is_step_complete(1));
    }

    #[test]
    fn test_successful_submit_keeps_last_step_complete() {
        let mut w = WizardState::with_initial_step(3, 2);
        let ticket = w.begin_submit();
        w.settle_submit(ticket, true);
        assert_eq!(w.completed_steps(), &set(&[2]));
    }
}
