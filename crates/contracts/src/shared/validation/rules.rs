//! Validation rules for a single form field

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;

pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
pub const PHONE_PATTERN: &str = r"^\+?[0-9 ()-]{6,20}$";

static PATTERN_CACHE: Lazy<Mutex<HashMap<&'static str, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn pattern_matches(pattern: &'static str, value: &str) -> bool {
    let mut cache = match PATTERN_CACHE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if !cache.contains_key(pattern) {
        match Regex::new(pattern) {
            Ok(re) => {
                cache.insert(pattern, re);
            }
            // An invalid pattern is a programming error; do not block the user on it
            Err(_) => return true,
        }
    }
    cache.get(pattern).map_or(true, |re| re.is_match(value))
}

/// Validation rules for a field.
/// Copy so schemas can live in `const` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// No constraints at all
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn length(self, min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..self
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn range(self, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    pub const fn pattern(self, pattern: &'static str, error: &'static str) -> Self {
        Self {
            pattern: Some(pattern),
            custom_error: Some(error),
            ..self
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    fn fail(&self, generated: String) -> Result<(), String> {
        Err(self
            .custom_error
            .map(str::to_string)
            .unwrap_or(generated))
    }

    /// Validate a string value. Empty optional values skip the remaining checks.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} es obligatorio", field_label));
            }
            return Ok(());
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} debe tener al menos {} caracteres",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} no puede superar {} caracteres",
                    field_label, max
                ));
            }
        }

        if let Some(pattern) = self.pattern {
            if !pattern_matches(pattern, trimmed) {
                return self.fail(format!("{} tiene un formato inválido", field_label));
            }
        }

        Ok(())
    }

    /// Validate an optional number against required/min/max
    pub fn validate_number(&self, value: Option<f64>, field_label: &str) -> Result<(), String> {
        let Some(value) = value else {
            if self.required {
                return Err(format!("{} es obligatorio", field_label));
            }
            return Ok(());
        };

        if !value.is_finite() {
            return Err(format!("{} debe ser un número", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} debe ser mayor o igual a {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} debe ser menor o igual a {}", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a foreign-key reference. A required reference must point at a saved record.
    pub fn validate_id(&self, value: Option<i64>, field_label: &str) -> Result<(), String> {
        match value {
            Some(id) if id > 0 => Ok(()),
            Some(_) => Err(format!("{} no es una referencia válida", field_label)),
            None if self.required => Err(format!("Debe seleccionar {}", field_label)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("  ", "Nombre").is_err());
        assert!(rules.validate_string("ACME", "Nombre").is_ok());
        assert!(ValidationRules::none().validate_string("", "Nombre").is_ok());
    }

    #[test]
    fn test_length_counts_chars() {
        let rules = ValidationRules::required().length(2, 4);
        assert!(rules.validate_string("ñañá", "Código").is_ok());
        assert!(rules.validate_string("a", "Código").is_err());
        assert!(rules.validate_string("abcde", "Código").is_err());
    }

    #[test]
    fn test_email_pattern() {
        let rules = ValidationRules::none().pattern(EMAIL_PATTERN, "Email inválido");
        assert!(rules.validate_string("noc@carrier.cl", "Email").is_ok());
        assert_eq!(
            rules.validate_string("noc-at-carrier", "Email"),
            Err("Email inválido".to_string())
        );
        // optional and empty: pattern not applied
        assert!(rules.validate_string("", "Email").is_ok());
    }

    #[test]
    fn test_number_range() {
        let rules = ValidationRules::required().range(1.0, 4094.0);
        assert!(rules.validate_number(Some(100.0), "VLAN").is_ok());
        assert!(rules.validate_number(Some(0.0), "VLAN").is_err());
        assert!(rules.validate_number(Some(4095.0), "VLAN").is_err());
        assert!(rules.validate_number(None, "VLAN").is_err());
        assert!(rules.validate_number(Some(f64::NAN), "VLAN").is_err());
        assert!(ValidationRules::none().validate_number(None, "VLAN").is_ok());
    }

    #[test]
    fn test_id_reference() {
        let rules = ValidationRules::required();
        assert!(rules.validate_id(Some(7), "Ubicación").is_ok());
        assert!(rules.validate_id(Some(0), "Ubicación").is_err());
        assert!(rules.validate_id(None, "Ubicación").is_err());
        assert!(ValidationRules::none().validate_id(None, "Ubicación").is_ok());
    }
}
