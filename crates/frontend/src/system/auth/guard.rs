use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for a signed-in user
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=|| view! { <div class="access-denied">"Sesión no iniciada."</div> }
        >
            {children()}
        </Show>
    }
}

/// Renders children only for administrators
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated() && s.is_admin())
            fallback=|| view! {
                <div class="access-denied">"Acceso denegado. Se requieren permisos de administrador."</div>
            }
        >
            {children()}
        </Show>
    }
}
