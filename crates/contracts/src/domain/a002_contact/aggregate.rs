use serde::{Deserialize, Serialize};

use crate::domain::common::{AuditFields, Entity, ListParams, ListQuery, RecordId};
use crate::shared::validation::{
    FieldRule, FieldValue, FormSchema, ValidationRules, EMAIL_PATTERN, PHONE_PATTERN,
};

/// Persona de contacto de una empresa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    pub company_id: RecordId,
    /// Denormalised by the backend for list display
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for Contact {
    type FormData = ContactFormData;
    type Filter = ContactFilter;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        match &self.company_name {
            Some(company) => format!("{} ({})", self.name, company),
            None => self.name.clone(),
        }
    }

    fn to_form(&self) -> ContactFormData {
        ContactFormData {
            name: self.name.clone(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            position: self.position.clone().unwrap_or_default(),
            company_id: Some(self.company_id),
        }
    }

    fn entity_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "contact"
    }

    fn endpoint() -> &'static str {
        "contacts"
    }

    fn element_name() -> &'static str {
        "Contacto"
    }

    fn list_name() -> &'static str {
        "Contactos"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub company_id: Option<RecordId>,
}

static CONTACT_RULES: [FieldRule; 5] = [
    FieldRule::new("name", "Nombre", ValidationRules::required().length(2, 128)),
    FieldRule::new(
        "email",
        "Email",
        ValidationRules::none().pattern(EMAIL_PATTERN, "Email no válido"),
    ),
    FieldRule::new(
        "phone",
        "Teléfono",
        ValidationRules::none().pattern(PHONE_PATTERN, "Teléfono no válido"),
    ),
    FieldRule::new("position", "Cargo", ValidationRules::none().max_length(64)),
    FieldRule::new("company_id", "la empresa", ValidationRules::required()),
];

impl FormSchema for ContactFormData {
    fn rules() -> &'static [FieldRule] {
        &CONTACT_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(&self.name),
            "email" => FieldValue::Text(&self.email),
            "phone" => FieldValue::Text(&self.phone),
            "position" => FieldValue::Text(&self.position),
            "company_id" => FieldValue::Id(self.company_id),
            _ => FieldValue::Flag,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactFilter {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub company_id: Option<RecordId>,
}

impl ListQuery for ContactFilter {
    fn list_params(&self) -> &ListParams {
        &self.params
    }

    fn list_params_mut(&mut self) -> &mut ListParams {
        &mut self.params
    }

    fn active_filters(&self) -> usize {
        usize::from(self.company_id.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_requires_company() {
        let form = ContactFormData {
            name: "Lucía Pérez".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("company_id"), Some("Debe seleccionar la empresa"));

        let form = ContactFormData {
            company_id: Some(0),
            ..form
        };
        assert!(form.validate().unwrap_err().has("company_id"));
    }

    #[test]
    fn test_contact_display_name() {
        let contact: Contact = serde_json::from_str(
            r#"{"id": 1, "name": "Lucía", "company_id": 4, "company_name": "Fibra Norte"}"#,
        )
        .unwrap();
        assert_eq!(contact.display_name(), "Lucía (Fibra Norte)");
        assert_eq!(contact.to_form().company_id, Some(4));
    }
}
