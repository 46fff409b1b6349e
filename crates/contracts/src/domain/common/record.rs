use serde::{Deserialize, Serialize};

/// Backend primary key. Every entity is a row of a relational table.
pub type RecordId = i64;

/// Audit columns maintained by the backend on every record.
///
/// The frontend only displays them; they are never sent back in form payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditFields {
    #[serde(default)]
    pub create_uid: Option<RecordId>,
    #[serde(default)]
    pub create_date: Option<String>,
    #[serde(default)]
    pub write_uid: Option<RecordId>,
    #[serde(default)]
    pub write_date: Option<String>,
}

impl AuditFields {
    /// True once the backend has modified the record after creation
    pub fn was_modified(&self) -> bool {
        match (&self.create_date, &self.write_date) {
            (Some(created), Some(written)) => created != written,
            (None, Some(_)) => true,
            _ => false,
        }
    }
}

/// Serde default for `active` flags: records are active unless stated otherwise
pub fn default_true() -> bool {
    true
}

/// Treat blank strings coming from form inputs as "not set".
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_fields_deserialize_missing() {
        let audit: AuditFields = serde_json::from_str("{}").unwrap();
        assert_eq!(audit, AuditFields::default());
        assert!(!audit.was_modified());
    }

    #[test]
    fn test_was_modified() {
        let audit = AuditFields {
            create_uid: Some(1),
            create_date: Some("2024-03-15 10:00:00".into()),
            write_uid: Some(2),
            write_date: Some("2024-03-16 09:00:00".into()),
        };
        assert!(audit.was_modified());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(" abc "), Some("abc".to_string()));
    }
}
