//! Row checkbox. The click does not reach the row (which opens the record).

use contracts::domain::common::{RecordId, RowSelection};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellCheckbox(item_id: RecordId, selection: RwSignal<RowSelection>) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selection.with(|s| s.is_selected(item_id))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    selection.update(|s| s.toggle(item_id, checked));
                }
            />
        </TableCell>
    }
}
