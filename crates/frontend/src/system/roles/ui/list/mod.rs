use contracts::system::roles::{permission_label, Role};
use leptos::prelude::*;

use crate::shared::list::{or_dash, Column, EntityListPage, ListController};
use crate::system::roles::api::use_role_api;

fn permissions_summary(role: &Role) -> String {
    if role.permissions.iter().any(|p| p == "admin") {
        return "Acceso total".to_string();
    }
    match role.permissions.len() {
        0 => "Sin permisos".to_string(),
        1..=2 => role
            .permissions
            .iter()
            .map(|p| permission_label(p))
            .collect::<Vec<_>>()
            .join(", "),
        n => format!("{} permisos", n),
    }
}

#[component]
pub fn RoleList() -> impl IntoView {
    let list = ListController::new(use_role_api());

    let columns = vec![
        Column::strong("Nombre", |r: &Role| r.name.clone()).width(180.0),
        Column::text("Descripción", |r: &Role| or_dash(r.description.as_ref())).width(260.0),
        Column::text("Permisos", permissions_summary).width(220.0),
    ];

    view! { <EntityListPage list=list columns=columns search_placeholder="Nombre del rol..." /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(permissions: &[&str]) -> Role {
        Role {
            id: 1,
            name: "Operaciones".into(),
            description: None,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            audit: Default::default(),
        }
    }

    #[test]
    fn test_permissions_summary() {
        assert_eq!(permissions_summary(&role(&[])), "Sin permisos");
        assert_eq!(permissions_summary(&role(&["admin", "ftp.read"])), "Acceso total");
        assert_eq!(
            permissions_summary(&role(&["ftp.read", "billing.read"])),
            "FTP: descarga, Facturación: consulta"
        );
        assert_eq!(
            permissions_summary(&role(&["ftp.read", "billing.read", "network.read"])),
            "3 permisos"
        );
    }
}
