use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{bind_flag, bind_text, CheckboxField, TextField};

#[component]
pub fn CompanyDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<Company>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;

    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let vat = bind_text(form, |f| f.vat.clone(), |f, v| f.vat = v);
    let address = bind_text(form, |f| f.address.clone(), |f, v| f.address = v);
    let city = bind_text(form, |f| f.city.clone(), |f, v| f.city = v);
    let phone = bind_text(form, |f| f.phone.clone(), |f, v| f.phone = v);
    let email = bind_text(form, |f| f.email.clone(), |f, v| f.email = v);
    let is_carrier = bind_flag(form, |f| f.is_carrier, |f, v| f.is_carrier = v);
    let active = bind_flag(form, |f| f.active, |f, v| f.active = v);

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|c: &Company| &c.audit>
            <div class="details-form__grid">
                <TextField ctx=ctx field="name" binding=name />
                <TextField ctx=ctx field="vat" binding=vat />
                <TextField ctx=ctx field="address" binding=address />
                <TextField ctx=ctx field="city" binding=city />
                <TextField ctx=ctx field="phone" binding=phone input_type="tel" />
                <TextField ctx=ctx field="email" binding=email input_type="email" />
            </div>
            <CheckboxField ctx=ctx field="is_carrier" binding=is_carrier label="Operador (carrier)" />
            <CheckboxField ctx=ctx field="active" binding=active label="Activa" />
        </EntityDetailsFrame>
    }
}
