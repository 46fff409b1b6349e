use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a002_contact::aggregate::Contact;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{bind_ref, bind_text, use_reference_options, ReferenceField, TextField};

#[component]
pub fn ContactDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<Contact>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;
    let companies = use_reference_options::<Company>();

    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let company = bind_ref(form, |f| f.company_id, |f, v| f.company_id = v);
    let position = bind_text(form, |f| f.position.clone(), |f, v| f.position = v);
    let phone = bind_text(form, |f| f.phone.clone(), |f, v| f.phone = v);
    let email = bind_text(form, |f| f.email.clone(), |f, v| f.email = v);

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|c: &Contact| &c.audit>
            <div class="details-form__grid">
                <TextField ctx=ctx field="name" binding=name />
                <ReferenceField ctx=ctx field="company_id" binding=company options=companies label="Empresa" />
                <TextField ctx=ctx field="position" binding=position />
                <TextField ctx=ctx field="phone" binding=phone input_type="tel" />
                <TextField ctx=ctx field="email" binding=email input_type="email" />
            </div>
        </EntityDetailsFrame>
    }
}
