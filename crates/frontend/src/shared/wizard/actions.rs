use contracts::shared::wizard::PrimaryAction;
use leptos::prelude::*;

use super::controller::{StepAction, WizardController};
use crate::shared::icons::icon;

/// Previous / Next / Submit bar.
///
/// "Next" runs `on_next` when given and advances only on success; without it
/// the wizard simply advances. On the last step the primary button runs
/// `on_submit`. Both paths lock the bar until they settle.
#[component]
pub fn WizardActions(
    controller: WizardController,
    #[prop(optional)] on_next: Option<StepAction>,
    on_submit: StepAction,
    #[prop(default = "Enviar")] submit_label: &'static str,
) -> impl IntoView {
    let busy = controller.busy();
    let primary = move || controller.state.with(|s| s.primary_action());
    let previous_disabled = move || !controller.state.with(|s| s.can_go_previous(busy.get()));

    let on_primary = move |_| match primary() {
        PrimaryAction::Next => controller.continue_with(on_next.clone()),
        PrimaryAction::Submit => controller.submit_with(on_submit.clone()),
    };

    view! {
        <div class="wizard-actions">
            <button
                class="button button--secondary"
                disabled=previous_disabled
                on:click=move |_| controller.previous_step()
            >
                {icon("chevron-left")}
                " Anterior"
            </button>
            <span class="wizard-actions__position">
                {move || controller.state.with(|s| {
                    format!("Paso {} de {}", s.current_step() + 1, s.total_steps())
                })}
            </span>
            <button
                class="button button--primary"
                disabled=move || busy.get()
                on:click=on_primary
            >
                {move || match (primary(), busy.get()) {
                    (_, true) => view! { "Procesando..." }.into_any(),
                    (PrimaryAction::Next, false) => view! { "Siguiente " {icon("chevron-right")} }.into_any(),
                    (PrimaryAction::Submit, false) => view! { {icon("send")} " " {submit_label} }.into_any(),
                }}
            </button>
        </div>
    }
}
