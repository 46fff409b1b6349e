use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a009_other_service::aggregate::OtherService;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{
    bind_flag, bind_number, bind_ref, bind_text, use_reference_options, CheckboxField,
    ReferenceField, TextAreaField, TextField,
};

#[component]
pub fn OtherServiceDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<OtherService>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;
    let companies = use_reference_options::<Company>();

    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let company = bind_ref(form, |f| f.company_id, |f, v| f.company_id = v);
    let fee = bind_number(form, |f| f.monthly_fee, |f, v| f.monthly_fee = v);
    let description = bind_text(form, |f| f.description.clone(), |f, v| f.description = v);
    let active = bind_flag(form, |f| f.active, |f, v| f.active = v);

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|s: &OtherService| &s.audit>
            <div class="details-form__grid">
                <TextField ctx=ctx field="name" binding=name />
                <ReferenceField ctx=ctx field="company_id" binding=company options=companies label="Empresa" />
                <TextField ctx=ctx field="monthly_fee" binding=fee />
            </div>
            <TextAreaField ctx=ctx field="description" binding=description />
            <CheckboxField ctx=ctx field="active" binding=active label="Activo" />
        </EntityDetailsFrame>
    }
}
