use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a003_contractor::aggregate::Contractor;
use contracts::domain::a005_link::aggregate::Link;
use contracts::domain::a006_service_order::aggregate::{OrderStatus, OrderType, ServiceOrder};
use contracts::domain::a007_viability::aggregate::ViabilityRequest;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{
    bind_choice, bind_date, bind_ref, bind_text, use_reference_options, ReferenceField,
    SelectField, TextAreaField, TextField,
};

#[component]
pub fn ServiceOrderDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<ServiceOrder>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;
    let companies = use_reference_options::<Company>();
    let viabilities = use_reference_options::<ViabilityRequest>();
    let links = use_reference_options::<Link>();
    let contractors = use_reference_options::<Contractor>();

    let number = bind_text(form, |f| f.number.clone(), |f, v| f.number = v);
    let company = bind_ref(form, |f| f.company_id, |f, v| f.company_id = v);
    let viability = bind_ref(form, |f| f.viability_id, |f, v| f.viability_id = v);
    let link = bind_ref(form, |f| f.link_id, |f, v| f.link_id = v);
    let contractor = bind_ref(form, |f| f.contractor_id, |f, v| f.contractor_id = v);
    let order_type = bind_choice(
        form,
        |f| f.order_type.code(),
        |f, code| {
            if let Some(kind) = OrderType::from_code(code) {
                f.order_type = kind;
            }
        },
    );
    let status = bind_choice(
        form,
        |f| f.status.code(),
        |f, code| {
            if let Some(status) = OrderStatus::from_code(code) {
                f.status = status;
            }
        },
    );
    let scheduled = bind_date(form, |f| f.scheduled_date, |f, v| f.scheduled_date = v);
    let description = bind_text(form, |f| f.description.clone(), |f, v| f.description = v);

    let types = OrderType::ALL.iter().map(|t| (t.code(), t.label())).collect::<Vec<_>>();
    let statuses = OrderStatus::ALL.iter().map(|s| (s.code(), s.label())).collect::<Vec<_>>();

    // A closed order loaded from the backend is shown read-only
    let closed = move || vm.record.with(|r| r.as_ref().is_some_and(|o| o.status.is_closed()));

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|o: &ServiceOrder| &o.audit>
            <Show when=closed>
                <div class="alert alert--info">"Esta orden está cerrada."</div>
            </Show>
            <div class="details-form__grid">
                <TextField ctx=ctx field="number" binding=number />
                <SelectField ctx=ctx field="order_type" binding=order_type options=types label="Tipo" />
                <SelectField ctx=ctx field="status" binding=status options=statuses label="Estado" />
                <ReferenceField ctx=ctx field="company_id" binding=company options=companies label="Empresa" />
                <ReferenceField ctx=ctx field="viability_id" binding=viability options=viabilities label="Viabilidad" />
                <ReferenceField ctx=ctx field="link_id" binding=link options=links label="Enlace" />
                <ReferenceField ctx=ctx field="contractor_id" binding=contractor options=contractors label="Contrata" />
                <TextField ctx=ctx field="scheduled_date" binding=scheduled input_type="date" label="Fecha programada" />
            </div>
            <TextAreaField ctx=ctx field="description" binding=description rows=4 />
        </EntityDetailsFrame>
    }
}
