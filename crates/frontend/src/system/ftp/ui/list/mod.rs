use contracts::system::ftp::FtpConfig;
use leptos::prelude::*;

use crate::shared::list::{active_badge, Column, EntityListPage, ListController};
use crate::system::ftp::api::use_ftp_config_api;

fn transfer_mode(config: &FtpConfig) -> (String, &'static str) {
    if config.passive_mode {
        ("Pasivo".to_string(), "neutral")
    } else {
        ("Activo".to_string(), "info")
    }
}

#[component]
pub fn FtpConfigList() -> impl IntoView {
    let list = ListController::new(use_ftp_config_api());

    let columns = vec![
        Column::strong("Nombre", |c: &FtpConfig| c.name.clone()).width(180.0),
        Column::text("Conexión", |c: &FtpConfig| c.address()).width(240.0),
        Column::text("Directorio raíz", |c: &FtpConfig| c.root_path.clone()),
        Column::badge("Modo", transfer_mode),
        Column::badge("Estado", |c: &FtpConfig| active_badge(c.active)),
    ];

    view! { <EntityListPage list=list columns=columns search_placeholder="Nombre o servidor..." /> }
}
