use contracts::domain::a007_viability::aggregate::{ViabilityRequest, ViabilityStatus};
use contracts::domain::common::RecordId;
use contracts::usecases::u501_viability_wizard::VIABILITY_STEPS;
use leptos::prelude::*;

use super::fields::{CustomerFields, LocationFields, ServiceFields};
use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{bind_choice, bind_date, SelectField, TextField};

#[component]
pub fn ViabilityDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<ViabilityRequest>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;

    let status = bind_choice(
        form,
        |f| f.status.code(),
        |f, code| {
            if let Some(status) = ViabilityStatus::from_code(code) {
                f.status = status;
            }
        },
    );
    let requested = bind_date(form, |f| f.requested_date, |f, v| f.requested_date = v);
    let statuses = ViabilityStatus::ALL.iter().map(|s| (s.code(), s.label())).collect::<Vec<_>>();

    let number = move || vm.record.with(|r| r.as_ref().map(|v| v.number.clone()));

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|v: &ViabilityRequest| &v.audit>
            {move || number().map(|n| view! { <div class="details-form__subtitle">"Nº " {n}</div> })}
            <div class="details-form__grid">
                <SelectField ctx=ctx field="status" binding=status options=statuses label="Estado" />
                <TextField ctx=ctx field="requested_date" binding=requested input_type="date" label="Fecha de solicitud" />
            </div>
            <fieldset class="details-form__section">
                <legend>{VIABILITY_STEPS[0].title}</legend>
                <CustomerFields ctx=ctx form=form />
            </fieldset>
            <fieldset class="details-form__section">
                <legend>{VIABILITY_STEPS[1].title}</legend>
                <LocationFields ctx=ctx form=form />
            </fieldset>
            <fieldset class="details-form__section">
                <legend>{VIABILITY_STEPS[2].title}</legend>
                <ServiceFields ctx=ctx form=form />
            </fieldset>
        </EntityDetailsFrame>
    }
}
