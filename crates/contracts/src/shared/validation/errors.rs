use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field-level validation messages, kept in form order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormErrors {
    entries: Vec<(String, String)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; only the first message per field is kept
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if !self.entries.iter().any(|(f, _)| *f == field) {
            self.entries.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(_, m)| m.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(f, _)| f.as_str())
    }

    /// Clear the error of one field, e.g. when the user edits it
    pub fn clear_field(&mut self, field: &str) {
        self.entries.retain(|(f, _)| f != field);
    }

    /// Keep only the errors of the given fields (wizard step validation)
    pub fn retain_fields(&mut self, fields: &[&str]) {
        self.entries.retain(|(f, _)| fields.contains(&f.as_str()));
    }

    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Build from a backend 422 body `{ "field": "message", ... }`
    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        let mut errors = Self::new();
        for (field, message) in map {
            errors.add(field, message);
        }
        errors
    }

    /// One-line summary for notifications
    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .map(|(_, m)| m.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FormErrors::new();
        errors.add("name", "Nombre es obligatorio");
        errors.add("name", "otro");
        errors.add("vat", "RUT es obligatorio");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Nombre es obligatorio"));
        assert_eq!(errors.first(), Some("Nombre es obligatorio"));
        assert_eq!(errors.summary(), "Nombre es obligatorio; RUT es obligatorio");
    }

    #[test]
    fn test_retain_and_clear() {
        let mut errors = FormErrors::new();
        errors.add("a", "1");
        errors.add("b", "2");
        errors.add("c", "3");
        errors.retain_fields(&["a", "c"]);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["a", "c"]);
        errors.clear_field("a");
        assert!(!errors.has("a"));
        assert!(errors.clone().into_result().is_err());
        errors.clear_field("c");
        assert!(errors.into_result().is_ok());
    }
}
