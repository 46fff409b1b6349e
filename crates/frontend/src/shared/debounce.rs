use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::config::SEARCH_DEBOUNCE_MS;

/// Run `apply` with the latest text once typing in `input` pauses.
///
/// Each keystroke replaces the pending timer; dropping a `Timeout` cancels
/// it. The initial value is not applied.
pub fn debounce_search(input: RwSignal<String>, apply: impl Fn(String) + Clone + 'static) {
    let pending = StoredValue::new_local(None::<Timeout>);
    Effect::new(move |first_run: Option<()>| {
        let text = input.get();
        if first_run.is_none() {
            return;
        }
        let apply = apply.clone();
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || apply(text));
        pending.set_value(Some(timeout));
    });
}
