use contracts::domain::a011_link_type::aggregate::LinkType;
use leptos::prelude::*;

use crate::shared::list::{active_badge, or_dash, Column, EntityListPage, ListController};
use crate::domain::a011_link_type::api::use_link_type_api;

/// Catalogue of link types (fibra, radio, cobre...)
#[component]
pub fn LinkTypeList() -> impl IntoView {
    let list = ListController::new(use_link_type_api());

    let columns = vec![
        Column::strong("Nombre", |t: &LinkType| t.name.clone()).width(200.0),
        Column::text("Descripción", |t: &LinkType| or_dash(t.description.as_ref())).width(320.0),
        Column::badge("Estado", |t: &LinkType| active_badge(t.active)),
    ];

    view! { <EntityListPage list=list columns=columns /> }
}
