use contracts::domain::a010_connection_type::aggregate::ConnectionType;
use leptos::prelude::*;

use crate::shared::list::{active_badge, or_dash, Column, EntityListPage, ListController};
use crate::domain::a010_connection_type::api::use_connection_type_api;

#[component]
pub fn ConnectionTypeList() -> impl IntoView {
    let list = ListController::new(use_connection_type_api());

    let columns = vec![
        Column::strong("Nombre", |t: &ConnectionType| t.name.clone()).width(200.0),
        Column::text("Descripción", |t: &ConnectionType| or_dash(t.description.as_ref())).width(320.0),
        Column::badge("Estado", |t: &ConnectionType| active_badge(t.active)),
    ];

    view! { <EntityListPage list=list columns=columns /> }
}
