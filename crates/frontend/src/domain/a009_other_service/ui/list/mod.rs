use contracts::domain::a009_other_service::aggregate::OtherService;
use leptos::prelude::*;

use crate::shared::list::{active_badge, or_dash, Column, EntityListPage, ListController};
use crate::domain::a009_other_service::api::use_other_service_api;

#[component]
pub fn OtherServiceList() -> impl IntoView {
    let list = ListController::new(use_other_service_api());

    let columns = vec![
        Column::strong("Nombre", |s: &OtherService| s.name.clone()).width(200.0),
        Column::text("Empresa", |s: &OtherService| or_dash(s.company_name.as_ref())).width(180.0),
        Column::number("Cuota mensual", |s: &OtherService| format!("{:.2}", s.monthly_fee)),
        Column::text("Descripción", |s: &OtherService| or_dash(s.description.as_ref())).width(240.0),
        Column::badge("Estado", |s: &OtherService| active_badge(s.active)),
    ];

    view! { <EntityListPage list=list columns=columns /> }
}
