use contracts::domain::a008_p2p::aggregate::{P2pRecord, P2pStatus};
use leptos::prelude::*;

use crate::shared::list::{or_dash, Column, EntityListPage, ListController};
use crate::domain::a008_p2p::api::use_p2p_api;

fn status_badge(record: &P2pRecord) -> (String, &'static str) {
    let modifier = match record.status {
        P2pStatus::Planned => "info",
        P2pStatus::Operational => "success",
        P2pStatus::Down => "error",
    };
    (record.status.label().to_string(), modifier)
}

/// Point-to-point radio links
#[component]
pub fn P2pList() -> impl IntoView {
    let list = ListController::new(use_p2p_api());

    let columns = vec![
        Column::strong("Nombre", |p: &P2pRecord| p.name.clone()).width(180.0),
        Column::text("Punto A", |p: &P2pRecord| p.point_a.clone()).width(160.0),
        Column::text("Punto B", |p: &P2pRecord| p.point_b.clone()).width(160.0),
        Column::number("Distancia (km)", |p: &P2pRecord| {
            or_dash(p.distance_km.map(|d| format!("{:.2}", d)))
        }),
        Column::badge("Estado", status_badge),
    ];

    view! { <EntityListPage list=list columns=columns search_placeholder="Nombre o emplazamiento..." /> }
}
