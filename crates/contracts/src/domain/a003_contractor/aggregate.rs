use serde::{Deserialize, Serialize};

use crate::domain::common::{default_true, AuditFields, Entity, ListParams, RecordId};
use crate::shared::validation::{
    FieldRule, FieldValue, FormSchema, ValidationRules, EMAIL_PATTERN, PHONE_PATTERN,
};

/// Contrata: empresa instaladora que ejecuta las órdenes de servicio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: RecordId,
    pub name: String,
    pub vat: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for Contractor {
    type FormData = ContractorFormData;
    type Filter = ListParams;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_form(&self) -> ContractorFormData {
        ContractorFormData {
            name: self.name.clone(),
            vat: self.vat.clone(),
            specialty: self.specialty.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            active: self.active,
        }
    }

    fn entity_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "contractor"
    }

    fn endpoint() -> &'static str {
        "contractors"
    }

    fn element_name() -> &'static str {
        "Contrata"
    }

    fn list_name() -> &'static str {
        "Contratas"
    }

    fn stale_minutes() -> u32 {
        30
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractorFormData {
    pub name: String,
    pub vat: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
    pub active: bool,
}

impl Default for ContractorFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            vat: String::new(),
            specialty: String::new(),
            phone: String::new(),
            email: String::new(),
            active: true,
        }
    }
}

static CONTRACTOR_RULES: [FieldRule; 5] = [
    FieldRule::new("name", "Nombre", ValidationRules::required().length(1, 128)),
    FieldRule::new("vat", "CIF/NIF", ValidationRules::required().length(3, 20)),
    FieldRule::new("specialty", "Especialidad", ValidationRules::none().max_length(64)),
    FieldRule::new(
        "phone",
        "Teléfono",
        ValidationRules::none().pattern(PHONE_PATTERN, "Teléfono no válido"),
    ),
    FieldRule::new(
        "email",
        "Email",
        ValidationRules::none().pattern(EMAIL_PATTERN, "Email no válido"),
    ),
];

impl FormSchema for ContractorFormData {
    fn rules() -> &'static [FieldRule] {
        &CONTRACTOR_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(&self.name),
            "vat" => FieldValue::Text(&self.vat),
            "specialty" => FieldValue::Text(&self.specialty),
            "phone" => FieldValue::Text(&self.phone),
            "email" => FieldValue::Text(&self.email),
            _ => FieldValue::Flag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contractor_form_defaults_active() {
        let form = ContractorFormData::default();
        assert!(form.active);
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "vat"]);
    }
}
