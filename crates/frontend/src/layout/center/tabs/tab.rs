use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// One entry of the tab strip
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        tabs_store
            .active
            .with(|active| active.as_deref() == Some(key.get_value().as_str()))
    });

    // Title follows update_tab_title (e.g. a detail panel renamed after load)
    let title = move || {
        tabs_store.opened.with(|tabs| {
            tabs.iter()
                .find(|t| t.key == key.get_value())
                .map(|t| t.title.clone())
                .unwrap_or_default()
        })
    };

    let on_click = move |_| tabs_store.activate_tab(&key.get_value());

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    view! {
        <div class="tabs__tab" class:tabs__tab--active=is_active on:click=on_click>
            <span class="tabs__title">{title}</span>
            <button class="tabs__close" title="Cerrar" on:click=on_close>
                {icon("x")}
            </button>
        </div>
    }
}
