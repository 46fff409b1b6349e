use contracts::system::roles::Role;
use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::date_utils::format_datetime;
use crate::shared::form::use_reference_options;
use crate::shared::list::{active_badge, or_dash, Column, EntityListPage, ListController, ReferenceFilter};
use crate::system::users::api::use_user_api;

fn last_login(user: &User) -> String {
    user.last_login
        .as_deref()
        .map(format_datetime)
        .unwrap_or_else(|| "Nunca".to_string())
}

#[component]
pub fn UserList() -> impl IntoView {
    let list = ListController::new(use_user_api());
    let roles = use_reference_options::<Role>();

    let columns = vec![
        Column::strong("Usuario", |u: &User| u.login.clone()).width(140.0),
        Column::text("Nombre", |u: &User| u.name.clone()).width(200.0),
        Column::text("Email", |u: &User| or_dash(u.email.as_ref())).width(180.0),
        Column::text("Rol", |u: &User| or_dash(u.role_name.as_ref())),
        Column::text("Último acceso", last_login),
        Column::badge("Estado", |u: &User| active_badge(u.active)),
    ];

    let filters = move || {
        view! {
            <ReferenceFilter
                label="Rol"
                options=roles
                value=Signal::derive(move || list.filter.with(|f| f.role_id))
                on_change=Callback::new(move |id| list.update_filter(|f| f.role_id = id))
            />
        }
    };

    view! {
        <EntityListPage list=list columns=columns filters=filters search_placeholder="Usuario, nombre o email..." />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_login_placeholder() {
        let user: User = serde_json::from_str(r#"{"id": 3, "login": "jperez", "name": "Juan Pérez"}"#).unwrap();
        assert_eq!(last_login(&user), "Nunca");
    }
}
