//! Two-way bindings between form inputs and a field of a form signal.
//!
//! Accessors are plain `fn` pointers so bindings stay `Copy` and can be
//! moved into any number of reactive closures.

use chrono::NaiveDate;
use contracts::domain::common::RecordId;
use contracts::shared::validation::{FormErrors, FormSchema};
use leptos::prelude::*;

use crate::shared::date_utils::{from_input_value, to_input_value};

/// Raw input text and its change handler
#[derive(Clone, Copy)]
pub struct TextBinding {
    pub value: Signal<String>,
    pub on_input: Callback<String>,
}

#[derive(Clone, Copy)]
pub struct FlagBinding {
    pub checked: Signal<bool>,
    pub on_change: Callback<bool>,
}

#[derive(Clone, Copy)]
pub struct IdBinding {
    pub value: Signal<Option<RecordId>>,
    pub on_change: Callback<Option<RecordId>>,
}

/// Parse a decimal typed by the user; accepts a decimal comma
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Parse a record id typed by hand; zero and negatives are kept so the
/// validator can report them
pub fn parse_id(raw: &str) -> Option<RecordId> {
    raw.trim().parse::<RecordId>().ok()
}

pub fn bind_text<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> TextBinding {
    TextBinding {
        value: Signal::derive(move || form.with(get)),
        on_input: Callback::new(move |value: String| form.update(|f| set(f, value))),
    }
}

/// Numeric input. The typed text is kept locally so partial input such as
/// "12," is not rewritten while typing; it resyncs when the form value
/// changes from elsewhere (record loaded, form reset).
pub fn bind_number<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> Option<f64>,
    set: fn(&mut F, Option<f64>),
) -> TextBinding {
    let text = RwSignal::new(form.with_untracked(|f| format_number(get(f))));
    Effect::new(move |_| {
        let value = form.with(get);
        if parse_number(&text.get_untracked()) != value {
            text.set(format_number(value));
        }
    });
    TextBinding {
        value: text.into(),
        on_input: Callback::new(move |raw: String| {
            let parsed = parse_number(&raw);
            text.set(raw);
            form.update(|f| set(f, parsed));
        }),
    }
}

/// Record id typed by hand (references without a picker)
pub fn bind_id_input<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> Option<RecordId>,
    set: fn(&mut F, Option<RecordId>),
) -> TextBinding {
    let text = RwSignal::new(form.with_untracked(|f| get(f).map(|id| id.to_string()).unwrap_or_default()));
    Effect::new(move |_| {
        let value = form.with(get);
        if parse_id(&text.get_untracked()) != value {
            text.set(value.map(|id| id.to_string()).unwrap_or_default());
        }
    });
    TextBinding {
        value: text.into(),
        on_input: Callback::new(move |raw: String| {
            let parsed = parse_id(&raw);
            text.set(raw);
            form.update(|f| set(f, parsed));
        }),
    }
}

pub fn bind_date<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> Option<NaiveDate>,
    set: fn(&mut F, Option<NaiveDate>),
) -> TextBinding {
    TextBinding {
        value: Signal::derive(move || form.with(|f| to_input_value(get(f)))),
        on_input: Callback::new(move |raw: String| {
            form.update(|f| set(f, from_input_value(&raw)))
        }),
    }
}

/// Closed choice stored as its wire code (status enums)
pub fn bind_choice<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> &'static str,
    set: fn(&mut F, &str),
) -> TextBinding {
    TextBinding {
        value: Signal::derive(move || form.with(|f| get(f).to_string())),
        on_input: Callback::new(move |code: String| form.update(|f| set(f, &code))),
    }
}

pub fn bind_flag<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> bool,
    set: fn(&mut F, bool),
) -> FlagBinding {
    FlagBinding {
        checked: Signal::derive(move || form.with(get)),
        on_change: Callback::new(move |checked: bool| form.update(|f| set(f, checked))),
    }
}

pub fn bind_ref<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> Option<RecordId>,
    set: fn(&mut F, Option<RecordId>),
) -> IdBinding {
    IdBinding {
        value: Signal::derive(move || form.with(get)),
        on_change: Callback::new(move |id: Option<RecordId>| form.update(|f| set(f, id))),
    }
}

/// What every field component needs from its form: the error map, inline
/// validation and the labels declared in the form's schema.
#[derive(Clone, Copy)]
pub struct FormContext {
    pub errors: RwSignal<FormErrors>,
    pub disabled: Signal<bool>,
    validate: Callback<&'static str>,
    label: fn(&str) -> &'static str,
    required: fn(&str) -> bool,
}

impl FormContext {
    pub fn new<F>(form: RwSignal<F>, errors: RwSignal<FormErrors>, disabled: Signal<bool>) -> Self
    where
        F: FormSchema + Send + Sync + 'static,
    {
        Self {
            errors,
            disabled,
            validate: Callback::new(move |field: &'static str| {
                let result = form.with_untracked(|f| f.validate_field(field));
                errors.update(|e| {
                    e.clear_field(field);
                    if let Err(message) = result {
                        e.add(field, message);
                    }
                });
            }),
            label: F::label,
            required: F::is_required,
        }
    }

    pub fn label(&self, field: &str) -> &'static str {
        (self.label)(field)
    }

    pub fn is_required(&self, field: &str) -> bool {
        (self.required)(field)
    }

    /// Re-run the field's rules (on blur)
    pub fn validate(&self, field: &'static str) {
        self.validate.run(field);
    }

    /// Re-validate while typing only once the field already shows an error
    pub fn revalidate_if_invalid(&self, field: &'static str) {
        if self.errors.with_untracked(|e| e.has(field)) {
            self.validate(field);
        }
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number(" 12 "), Some(12.0));
        assert_eq!(parse_number("12,5"), Some(12.5));
        assert_eq!(parse_number("12."), Some(12.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(None), "");
        assert_eq!(format_number(Some(100.0)), "100");
        assert_eq!(format_number(Some(-3.25)), "-3.25");
    }

    #[test]
    fn test_format_then_parse_keeps_value() {
        for v in [0.0, 1.0, 4094.0, -90.0, 40.4168, 100000.0] {
            assert_eq!(parse_number(&format_number(Some(v))), Some(v));
        }
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("4.2"), None);
    }
}
