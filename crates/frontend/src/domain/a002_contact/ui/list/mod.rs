use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a002_contact::aggregate::Contact;
use leptos::prelude::*;

use crate::shared::form::use_reference_options;
use crate::shared::list::{or_dash, Column, EntityListPage, ListController, ReferenceFilter};
use crate::domain::a002_contact::api::use_contact_api;

#[component]
pub fn ContactList() -> impl IntoView {
    let list = ListController::new(use_contact_api());
    let companies = use_reference_options::<Company>();

    let columns = vec![
        Column::strong("Nombre", |c: &Contact| c.name.clone()).width(200.0),
        Column::text("Empresa", |c: &Contact| or_dash(c.company_name.as_ref())).width(180.0),
        Column::text("Cargo", |c: &Contact| or_dash(c.position.as_ref())),
        Column::text("Teléfono", |c: &Contact| or_dash(c.phone.as_ref())),
        Column::text("Email", |c: &Contact| or_dash(c.email.as_ref())).width(180.0),
    ];

    let filters = move || {
        view! {
            <ReferenceFilter
                label="Empresa"
                options=companies
                value=Signal::derive(move || list.filter.with(|f| f.company_id))
                on_change=Callback::new(move |id| list.update_filter(|f| f.company_id = id))
            />
        }
    };

    view! {
        <EntityListPage list=list columns=columns filters=filters search_placeholder="Nombre o email..." />
    }
}
