//! Filter inputs for the filter panel of list pages.

use contracts::domain::common::RecordId;
use leptos::prelude::*;
use thaw::*;

/// `(code, label)` pairs of a closed enum, for selects
pub fn choice_options<T: Copy>(
    all: &[T],
    code: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
) -> Vec<(String, String)> {
    all.iter()
        .map(|item| (code(item).to_string(), label(item).to_string()))
        .collect()
}

pub fn id_options(items: &[(RecordId, String)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(id, name)| (id.to_string(), name.clone()))
        .collect()
}

/// Select with a leading "Todos" entry; the empty value means no filter.
#[component]
pub fn ChoiceFilter(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let selected = RwSignal::new(value.get_untracked());

    Effect::new(move |_| {
        let external = value.get();
        if selected.get_untracked() != external {
            selected.set(external);
        }
    });
    Effect::new(move |_| {
        let current = selected.get();
        if current != value.get_untracked() {
            on_change.run(current);
        }
    });

    view! {
        <div class="filter-panel__field">
            <label>{label}</label>
            <Select value=selected size=SelectSize::Small>
                <option value="">"Todos"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(code, text)| view! { <option value=code>{text}</option> })
                        .collect_view()
                }}
            </Select>
        </div>
    }
}

/// Yes/no/any filter over an optional flag
#[component]
pub fn FlagFilter(
    label: &'static str,
    yes: &'static str,
    no: &'static str,
    #[prop(into)] value: Signal<Option<bool>>,
    on_change: Callback<Option<bool>>,
) -> impl IntoView {
    let code = Signal::derive(move || match value.get() {
        Some(true) => "1".to_string(),
        Some(false) => "0".to_string(),
        None => String::new(),
    });
    let options = vec![("1".to_string(), yes.to_string()), ("0".to_string(), no.to_string())];

    view! {
        <ChoiceFilter
            label=label
            options=options
            value=code
            on_change=Callback::new(move |code: String| {
                on_change.run(match code.as_str() {
                    "1" => Some(true),
                    "0" => Some(false),
                    _ => None,
                })
            })
        />
    }
}

/// Filter by a referenced record (company, link type, ...)
#[component]
pub fn ReferenceFilter(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<(RecordId, String)>>,
    #[prop(into)] value: Signal<Option<RecordId>>,
    on_change: Callback<Option<RecordId>>,
) -> impl IntoView {
    view! {
        <ChoiceFilter
            label=label
            options=Signal::derive(move || options.with(|o| id_options(o)))
            value=Signal::derive(move || value.get().map(|id| id.to_string()).unwrap_or_default())
            on_change=Callback::new(move |code: String| on_change.run(code.parse::<RecordId>().ok()))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_options() {
        let options = id_options(&[(3, "Fibra Norte".to_string())]);
        assert_eq!(options, vec![("3".to_string(), "Fibra Norte".to_string())]);
    }
}
