use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::state::QueryClient;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tabs and shell state
    provide_context(AppGlobalContext::new());

    // Shared read cache for every entity client
    provide_context(QueryClient::new());

    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
        <ToastHost />
    }
}
