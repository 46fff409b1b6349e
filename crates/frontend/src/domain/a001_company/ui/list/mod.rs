use contracts::domain::a001_company::aggregate::Company;
use leptos::prelude::*;

use crate::shared::list::{active_badge, or_dash, Column, EntityListPage, FlagFilter, ListController};
use crate::domain::a001_company::api::use_company_api;

fn kind_badge(company: &Company) -> (String, &'static str) {
    let modifier = if company.is_carrier { "info" } else { "neutral" };
    (company.kind_label().to_string(), modifier)
}

#[component]
pub fn CompanyList() -> impl IntoView {
    let list = ListController::new(use_company_api());

    let columns = vec![
        Column::strong("Nombre", |c: &Company| c.name.clone()).width(220.0),
        Column::text("CIF/NIF", |c: &Company| c.vat.clone()),
        Column::badge("Tipo", kind_badge),
        Column::text("Ciudad", |c: &Company| or_dash(c.city.as_ref())),
        Column::text("Teléfono", |c: &Company| or_dash(c.phone.as_ref())),
        Column::text("Email", |c: &Company| or_dash(c.email.as_ref())).width(180.0),
        Column::badge("Estado", |c: &Company| active_badge(c.active)),
    ];

    let filters = move || {
        view! {
            <FlagFilter
                label="Tipo"
                yes="Operadores"
                no="Clientes"
                value=Signal::derive(move || list.filter.with(|f| f.is_carrier))
                on_change=Callback::new(move |v| list.update_filter(|f| f.is_carrier = v))
            />
            <FlagFilter
                label="Estado"
                yes="Activas"
                no="Inactivas"
                value=Signal::derive(move || list.filter.with(|f| f.active))
                on_change=Callback::new(move |v| list.update_filter(|f| f.active = v))
            />
        }
    };

    view! {
        <EntityListPage
            list=list
            columns=columns
            filters=filters
            search_placeholder="Nombre, CIF o ciudad..."
        />
    }
}
