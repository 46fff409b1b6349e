//! Guided creation of a viability request.
//!
//! Each "Siguiente" validates only the fields of the current step; the
//! review step validates everything again before creating the request.

use contracts::domain::a007_viability::aggregate::{ViabilityFormData, ViabilityRequest};
use contracts::domain::common::Entity;
use contracts::shared::validation::{FormErrors, FormSchema};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_viability_wizard::{
    step_of_first_error, validate_step, ViabilityWizard, VIABILITY_STEPS,
};
use leptos::prelude::*;

use super::review::ViabilityReview;
use crate::domain::a007_viability::api::use_viability_api;
use crate::domain::a007_viability::ui::details::fields::{CustomerFields, LocationFields, ServiceFields};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::details::view_model::server_validation_errors;
use crate::shared::form::FormContext;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use crate::shared::toast::use_toast;
use crate::shared::wizard::{step_action, WizardActions, WizardController, WizardNavigation};

/// Replace the errors of `fields` with the outcome of a step validation
fn apply_step_errors(current: &mut FormErrors, fields: &[&str], result: &Result<(), FormErrors>) {
    for field in fields {
        current.clear_field(field);
    }
    if let Err(step_errors) = result {
        for field in step_errors.fields() {
            if let Some(message) = step_errors.get(field) {
                current.add(field, message);
            }
        }
    }
}

#[component]
pub fn ViabilityWizardPage() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_toast();
    let api = use_viability_api();

    let form = RwSignal::new(ViabilityFormData::default());
    let errors = RwSignal::new(FormErrors::default());
    let controller = WizardController::new(VIABILITY_STEPS.len());
    let ctx = FormContext::new(form, errors, controller.busy());

    let steps: Vec<(&'static str, &'static str)> = VIABILITY_STEPS
        .iter()
        .map(|s| (s.title, s.description))
        .collect();

    let on_next = step_action(move || async move {
        let step = controller.state.with_untracked(|s| s.current_step());
        let result = form.with_untracked(|f| validate_step(f, step));
        let fields = VIABILITY_STEPS.get(step).map(|s| s.fields).unwrap_or(&[]);
        errors.update(|e| apply_step_errors(e, fields, &result));
        result.map_err(|e| {
            toast.error(format!("Revise los datos del paso: {}", e.summary()));
            e.summary()
        })
    });

    let on_submit = step_action(move || async move {
        let data = form.get_untracked();
        if let Err(invalid) = data.validate() {
            if let Some(step) = step_of_first_error(&invalid) {
                controller.go_to_step(step as isize);
            }
            toast.error(format!("Revise el formulario: {}", invalid.summary()));
            let summary = invalid.summary();
            errors.set(invalid);
            return Err(summary);
        }

        match api.create(&data).await {
            Ok(created) => {
                toast.success(format!("Viabilidad {} creada", created.number));
                tabs_store.open_tab(
                    &ViabilityRequest::detail_tab_key(Some(created.id())),
                    &detail_tab_label(ViabilityRequest::element_name(), &created.number),
                );
                form.set(ViabilityFormData::default());
                errors.set(FormErrors::default());
                controller.reset();
                Ok(())
            }
            Err(e) => {
                match server_validation_errors(&e) {
                    Some(server) => {
                        if let Some(step) = step_of_first_error(&server) {
                            controller.go_to_step(step as isize);
                        }
                        toast.error(format!("El servidor rechazó los datos: {}", server.summary()));
                        errors.set(server);
                    }
                    None => toast.error(format!("No se pudo crear la viabilidad: {}", e)),
                }
                Err(e)
            }
        }
    });

    let step_body = move || {
        let step = controller.current_step().get();
        let def = VIABILITY_STEPS[step.min(VIABILITY_STEPS.len() - 1)];
        let body = match step {
            0 => view! { <CustomerFields ctx=ctx form=form /> }.into_any(),
            1 => view! { <LocationFields ctx=ctx form=form /> }.into_any(),
            2 => view! { <ServiceFields ctx=ctx form=form /> }.into_any(),
            _ => view! { <ViabilityReview form=form errors=errors /> }.into_any(),
        };
        view! {
            <section class="wizard-step">
                <h2 class="wizard-step__title">{def.title}</h2>
                <p class="wizard-step__description">{def.description}</p>
                {body}
            </section>
        }
    };

    let on_next = StoredValue::new_local(on_next);
    let on_submit = StoredValue::new_local(on_submit);

    view! {
        <PageFrame page_id=page_id(&ViabilityWizard::full_name(), PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{ViabilityWizard::display_name()}</h1>
                </div>
            </div>
            <p class="page__subtitle">{ViabilityWizard::description()}</p>
            <div class="wizard">
                <WizardNavigation controller=controller steps=steps />
                <div class="wizard__body">
                    {step_body}
                    <WizardActions
                        controller=controller
                        on_next=on_next.get_value()
                        on_submit=on_submit.get_value()
                        submit_label="Crear viabilidad"
                    />
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_errors_replace_only_step_fields() {
        let mut current = FormErrors::new();
        current.add("address", "Dirección es obligatoria");
        current.add("requested_bandwidth_mbps", "Ancho de banda es obligatorio");

        let form = ViabilityFormData {
            address: "Calle Mayor 12".into(),
            ..Default::default()
        };
        let result = validate_step(&form, 1);
        let fields = VIABILITY_STEPS[1].fields;
        apply_step_errors(&mut current, fields, &result);

        assert!(!current.has("address"));
        assert!(current.has("city"));
        assert!(current.has("requested_bandwidth_mbps"));
    }

    #[test]
    fn test_valid_step_clears_its_errors() {
        let mut current = FormErrors::new();
        current.add("company_id", "Seleccione la empresa");
        let form = ViabilityFormData {
            company_id: Some(7),
            ..Default::default()
        };
        let result = validate_step(&form, 0);
        apply_step_errors(&mut current, VIABILITY_STEPS[0].fields, &result);
        assert!(current.is_empty());
    }
}
