use contracts::shared::wizard::StepStatus;
use leptos::prelude::*;

use super::controller::WizardController;
use crate::shared::icons::icon;

fn status_class(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Current => "wizard-nav__step wizard-nav__step--current",
        StepStatus::Complete => "wizard-nav__step wizard-nav__step--complete",
        StepStatus::Visited => "wizard-nav__step wizard-nav__step--visited",
        StepStatus::Locked => "wizard-nav__step wizard-nav__step--locked",
    }
}

/// Step list with progress bar. Completed steps and steps up to the current
/// one can be clicked; later ones stay locked.
#[component]
pub fn WizardNavigation(
    controller: WizardController,
    /// `(title, description)` per step
    steps: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let busy = controller.busy();
    let progress = move || controller.state.with(|s| s.progress_percent());

    view! {
        <nav class="wizard-nav">
            <div class="wizard-nav__progress">
                <div
                    class="wizard-nav__progress-bar"
                    style=move || format!("width: {}%;", progress())
                ></div>
            </div>
            <ol class="wizard-nav__steps">
                {steps
                    .into_iter()
                    .enumerate()
                    .map(|(index, (title, description))| {
                        let status = move || controller.state.with(|s| s.step_status(index));
                        let clickable = move || {
                            !busy.get() && controller.state.with(|s| s.is_step_clickable(index))
                        };
                        view! {
                            <li class=move || status_class(status())>
                                <button
                                    class="wizard-nav__button"
                                    disabled=move || !clickable()
                                    title=description
                                    on:click=move |_| controller.go_to_step(index as isize)
                                >
                                    <span class="wizard-nav__index">
                                        {move || match status() {
                                            StepStatus::Complete => icon("check"),
                                            _ => view! { {index + 1} }.into_any(),
                                        }}
                                    </span>
                                    <span class="wizard-nav__title">{title}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert!(status_class(StepStatus::Current).ends_with("--current"));
        assert!(status_class(StepStatus::Locked).ends_with("--locked"));
    }
}
