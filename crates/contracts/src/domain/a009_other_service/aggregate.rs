use serde::{Deserialize, Serialize};

use crate::domain::common::{default_true, AuditFields, Entity, ListParams, RecordId};
use crate::shared::validation::{FieldRule, FieldValue, FormSchema, ValidationRules};

/// Otros servicios facturables (housing, mantenimiento, IP fija...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherService {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub company_id: Option<RecordId>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub monthly_fee: f64,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for OtherService {
    type FormData = OtherServiceFormData;
    type Filter = ListParams;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_form(&self) -> OtherServiceFormData {
        OtherServiceFormData {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            company_id: self.company_id,
            monthly_fee: Some(self.monthly_fee),
            active: self.active,
        }
    }

    fn entity_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "other_service"
    }

    fn endpoint() -> &'static str {
        "other-services"
    }

    fn element_name() -> &'static str {
        "Otro servicio"
    }

    fn list_name() -> &'static str {
        "Otros servicios"
    }

    fn stale_minutes() -> u32 {
        30
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherServiceFormData {
    pub name: String,
    pub description: String,
    pub company_id: Option<RecordId>,
    pub monthly_fee: Option<f64>,
    pub active: bool,
}

impl Default for OtherServiceFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            company_id: None,
            monthly_fee: None,
            active: true,
        }
    }
}

static OTHER_SERVICE_RULES: [FieldRule; 4] = [
    FieldRule::new("name", "Nombre", ValidationRules::required().length(1, 128)),
    FieldRule::new("description", "Descripción", ValidationRules::none().max_length(512)),
    FieldRule::new("company_id", "la empresa", ValidationRules::none()),
    FieldRule::new(
        "monthly_fee",
        "Cuota mensual",
        ValidationRules::required().range(0.0, 1_000_000.0),
    ),
];

impl FormSchema for OtherServiceFormData {
    fn rules() -> &'static [FieldRule] {
        &OTHER_SERVICE_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(&self.name),
            "description" => FieldValue::Text(&self.description),
            "company_id" => FieldValue::Id(self.company_id),
            "monthly_fee" => FieldValue::Number(self.monthly_fee),
            _ => FieldValue::Flag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_fee_required_and_positive() {
        let mut form = OtherServiceFormData {
            name: "IP fija".into(),
            ..Default::default()
        };
        assert!(form.validate().unwrap_err().has("monthly_fee"));
        form.monthly_fee = Some(-1.0);
        assert!(form.validate().is_err());
        form.monthly_fee = Some(15.0);
        assert!(form.validate().is_ok());
    }
}
