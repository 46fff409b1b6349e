//! "Select all" checkbox for the header row of a list table.

use contracts::domain::common::{RecordId, RowSelection};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Checked when every visible row is selected, indeterminate when only some
/// are. Clicking selects or clears the visible page only.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)] visible_ids: Signal<Vec<RecordId>>,
    selection: RwSignal<RowSelection>,
) -> impl IntoView {
    let all = Signal::derive(move || {
        let ids = visible_ids.get();
        selection.with(|s| s.all_selected(&ids))
    });
    let some = Signal::derive(move || {
        let ids = visible_ids.get();
        selection.with(|s| s.any_selected(&ids) && !s.all_selected(&ids))
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        let indeterminate = some.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Seleccionar página"
                prop:checked=move || all.get()
                prop:disabled=move || visible_ids.with(|ids| ids.is_empty())
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    let ids = visible_ids.get_untracked();
                    selection.update(|s| s.set_all(&ids, checked));
                }
            />
        </TableHeaderCell>
    }
}
