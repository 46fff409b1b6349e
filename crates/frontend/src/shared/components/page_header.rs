use leptos::prelude::*;
use thaw::*;

/// Title row of a page: title, optional record count badge, actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Shown as a badge next to the title when set
    #[prop(optional, into)]
    count: MaybeProp<u64>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || count.get().map(|n| view! {
                    <Badge>{n.to_string()}</Badge>
                })}
                {move || subtitle.get().map(|s| view! {
                    <span class="page__subtitle">{s}</span>
                })}
            </div>
            <div class="page__header-right">{children()}</div>
        </div>
    }
}
