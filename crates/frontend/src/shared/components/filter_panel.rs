use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter block with the pagination controls in its header
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    /// Filters set besides the search text (badge)
    #[prop(into)]
    active_filters_count: Signal<usize>,
    #[prop(into)]
    pagination_controls: ViewFn,
    #[prop(into)]
    filter_content: ViewFn,
    /// Clears every filter; the button shows only when some filter is set
    #[prop(optional)]
    on_clear: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">{pagination_controls.run()}</div>
                {on_clear.map(|clear| view! {
                    <div class="filter-panel-header__right">
                        <Show when=move || { active_filters_count.get() > 0 }>
                            <button
                                class="button button--ghost button--small"
                                on:click=move |_| clear.run(())
                            >
                                {icon("x")}
                                "Limpiar filtros"
                            </button>
                        </Show>
                    </div>
                })}
            </div>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
                class:filter-panel__collapsible--collapsed=move || !is_expanded.get()
            >
                <div class="filter-panel-content">{filter_content.run()}</div>
            </div>
        </div>
    }
}
