use contracts::domain::a003_contractor::aggregate::Contractor;
use leptos::prelude::*;

use crate::shared::list::{active_badge, or_dash, Column, EntityListPage, ListController};
use crate::domain::a003_contractor::api::use_contractor_api;

/// Contratas: field-work subcontractors assigned to service orders
#[component]
pub fn ContractorList() -> impl IntoView {
    let list = ListController::new(use_contractor_api());

    let columns = vec![
        Column::strong("Nombre", |c: &Contractor| c.name.clone()).width(200.0),
        Column::text("CIF/NIF", |c: &Contractor| c.vat.clone()),
        Column::text("Especialidad", |c: &Contractor| or_dash(c.specialty.as_ref())).width(160.0),
        Column::text("Teléfono", |c: &Contractor| or_dash(c.phone.as_ref())),
        Column::text("Email", |c: &Contractor| or_dash(c.email.as_ref())).width(180.0),
        Column::badge("Estado", |c: &Contractor| active_badge(c.active)),
    ];

    view! { <EntityListPage list=list columns=columns /> }
}
