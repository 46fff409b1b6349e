use contracts::domain::a010_connection_type::aggregate::ConnectionType;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{bind_flag, bind_text, CheckboxField, TextAreaField, TextField};

#[component]
pub fn ConnectionTypeDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<ConnectionType>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;

    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let description = bind_text(form, |f| f.description.clone(), |f, v| f.description = v);
    let active = bind_flag(form, |f| f.active, |f, v| f.active = v);

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|t: &ConnectionType| &t.audit>
            <TextField ctx=ctx field="name" binding=name />
            <TextAreaField ctx=ctx field="description" binding=description />
            <CheckboxField ctx=ctx field="active" binding=active label="Activo" />
        </EntityDetailsFrame>
    }
}
