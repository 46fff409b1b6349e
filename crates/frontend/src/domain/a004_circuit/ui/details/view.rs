use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a004_circuit::aggregate::{Circuit, CircuitStatus};
use contracts::domain::common::RecordId;
use leptos::prelude::*;

use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{
    bind_choice, bind_date, bind_number, bind_ref, bind_text, use_reference_options,
    ReferenceField, SelectField, TextField,
};

#[component]
pub fn CircuitDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<Circuit>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;
    let companies = use_reference_options::<Company>();

    let code = bind_text(form, |f| f.code.clone(), |f, v| f.code = v);
    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let company = bind_ref(form, |f| f.company_id, |f, v| f.company_id = v);
    let bandwidth = bind_number(form, |f| f.bandwidth_mbps, |f, v| f.bandwidth_mbps = v);
    let odf = bind_text(form, |f| f.odf.clone(), |f, v| f.odf = v);
    let odf_port = bind_number(form, |f| f.odf_port, |f, v| f.odf_port = v);
    let status = bind_choice(
        form,
        |f| f.status.code(),
        |f, code| {
            if let Some(status) = CircuitStatus::from_code(code) {
                f.status = status;
            }
        },
    );
    let installed = bind_date(form, |f| f.installation_date, |f, v| f.installation_date = v);

    let statuses = CircuitStatus::ALL.iter().map(|s| (s.code(), s.label())).collect::<Vec<_>>();

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|c: &Circuit| &c.audit>
            <div class="details-form__grid">
                <TextField ctx=ctx field="code" binding=code />
                <TextField ctx=ctx field="name" binding=name />
                <ReferenceField ctx=ctx field="company_id" binding=company options=companies label="Empresa" />
                <TextField ctx=ctx field="bandwidth_mbps" binding=bandwidth />
                <TextField ctx=ctx field="odf" binding=odf />
                <TextField ctx=ctx field="odf_port" binding=odf_port />
                <SelectField ctx=ctx field="status" binding=status options=statuses label="Estado" />
                <TextField ctx=ctx field="installation_date" binding=installed input_type="date" label="Fecha de instalación" />
            </div>
        </EntityDetailsFrame>
    }
}
