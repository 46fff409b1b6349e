use super::{FormErrors, ValidationRules};

/// A field value as seen by the validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(Option<f64>),
    /// Foreign-key reference to another record
    Id(Option<i64>),
    /// Always valid (checkboxes and other closed inputs)
    Flag,
}

impl<'a> FieldValue<'a> {
    pub fn optional_text(value: &'a Option<String>) -> Self {
        FieldValue::Text(value.as_deref().unwrap_or(""))
    }

    pub fn int(value: Option<i64>) -> Self {
        FieldValue::Number(value.map(|v| v as f64))
    }
}

/// Declarative rule for one field of a form
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: ValidationRules,
}

impl FieldRule {
    pub const fn new(name: &'static str, label: &'static str, rules: ValidationRules) -> Self {
        Self { name, label, rules }
    }

    pub fn check(&self, value: FieldValue<'_>) -> Result<(), String> {
        match value {
            FieldValue::Text(text) => self.rules.validate_string(text, self.label),
            FieldValue::Number(number) => self.rules.validate_number(number, self.label),
            FieldValue::Id(id) => self.rules.validate_id(id, self.label),
            FieldValue::Flag => Ok(()),
        }
    }
}

/// A form with a declarative validation schema
pub trait FormSchema {
    /// Rules in display order
    fn rules() -> &'static [FieldRule];

    /// Current value of a field named in [`FormSchema::rules`]
    fn field_value(&self, field: &str) -> FieldValue<'_>;

    /// Cross-field checks that a per-field rule cannot express
    fn validate_extra(&self, _errors: &mut FormErrors) {}

    fn rule(field: &str) -> Option<&'static FieldRule> {
        Self::rules().iter().find(|r| r.name == field)
    }

    fn label(field: &str) -> &'static str {
        Self::rule(field).map_or("", |r| r.label)
    }

    fn is_required(field: &str) -> bool {
        Self::rule(field).map_or(false, |r| r.rules.is_required())
    }

    /// Validate a single field (inline validation on blur)
    fn validate_field(&self, field: &str) -> Result<(), String> {
        match Self::rule(field) {
            Some(rule) => rule.check(self.field_value(field)),
            None => Ok(()),
        }
    }

    /// Validate every field and the cross-field checks
    fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        for rule in Self::rules() {
            if let Err(message) = rule.check(self.field_value(rule.name)) {
                errors.add(rule.name, message);
            }
        }
        self.validate_extra(&mut errors);
        errors.into_result()
    }

    /// Validate only a subset of fields (one wizard step)
    fn validate_fields(&self, fields: &[&str]) -> Result<(), FormErrors> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(mut errors) => {
                errors.retain_fields(fields);
                errors.into_result()
            }
        }
    }
}
