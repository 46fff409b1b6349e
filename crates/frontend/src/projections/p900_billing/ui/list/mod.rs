mod state;
mod tab_panel;

use contracts::projections::p900_billing::{BillingStats, BillingTab, BILLING_REGISTER};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::projections::p900_billing::api::use_billing_api;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_REGISTER};
use tab_panel::BillingTabPanel;

/// Facturación: one tab per posting stage, with record counts
#[component]
pub fn BillingRegister() -> impl IntoView {
    let api = use_billing_api();
    let active = RwSignal::new(BillingTab::default());
    let stats = RwSignal::new(None::<BillingStats>);

    Effect::new(move |_| {
        let _revision = api.revision();
        spawn_local(async move {
            match api.stats().await {
                Ok(s) => stats.set(Some(s)),
                Err(e) => log::warn!("billing stats failed: {}", e),
            }
        });
    });

    let tab_buttons = BillingTab::ALL
        .into_iter()
        .map(|tab| {
            let count = move || {
                stats.with(|s| s.as_ref().map(|s| format!(" ({})", s.count_for(tab))))
            };
            view! {
                <button
                    class="register-tabs__tab"
                    class:register-tabs__tab--active=move || active.get() == tab
                    on:click=move |_| active.set(tab)
                >
                    {tab.title()}
                    {count}
                </button>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id=page_id(BILLING_REGISTER, PAGE_CAT_REGISTER) category=PAGE_CAT_REGISTER>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Facturación"</h1>
                </div>
            </div>
            <nav class="register-tabs">{tab_buttons}</nav>
            {move || {
                let tab = active.get();
                view! { <BillingTabPanel tab=tab /> }
            }}
        </PageFrame>
    }
}
