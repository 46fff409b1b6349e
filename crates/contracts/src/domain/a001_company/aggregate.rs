use serde::{Deserialize, Serialize};

use crate::domain::common::{
    default_true, non_blank, AuditFields, Entity, ListParams, ListQuery, RecordId,
};
use crate::shared::validation::{
    FieldRule, FieldValue, FormSchema, ValidationRules, EMAIL_PATTERN, PHONE_PATTERN,
};

// ============================================================================
// Aggregate
// ============================================================================

/// Empresa: cliente final u operador (carrier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: RecordId,
    pub name: String,
    pub vat: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Operators (CO carriers) are listed in the Red menu as well
    #[serde(default)]
    pub is_carrier: bool,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Company {
    pub fn kind_label(&self) -> &'static str {
        if self.is_carrier {
            "Operador"
        } else {
            "Cliente"
        }
    }
}

impl Entity for Company {
    type FormData = CompanyFormData;
    type Filter = CompanyFilter;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_form(&self) -> CompanyFormData {
        CompanyFormData {
            name: self.name.clone(),
            vat: self.vat.clone(),
            address: self.address.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            is_carrier: self.is_carrier,
            active: self.active,
        }
    }

    fn entity_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "company"
    }

    fn endpoint() -> &'static str {
        "companies"
    }

    fn element_name() -> &'static str {
        "Empresa"
    }

    fn list_name() -> &'static str {
        "Empresas"
    }

    fn stale_minutes() -> u32 {
        15
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyFormData {
    pub name: String,
    pub vat: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub is_carrier: bool,
    pub active: bool,
}

impl Default for CompanyFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            vat: String::new(),
            address: String::new(),
            city: String::new(),
            phone: String::new(),
            email: String::new(),
            is_carrier: false,
            active: true,
        }
    }
}

impl CompanyFormData {
    /// Optional text fields as sent to the backend
    pub fn email_value(&self) -> Option<String> {
        non_blank(&self.email)
    }
}

static COMPANY_RULES: [FieldRule; 6] = [
    FieldRule::new("name", "Nombre", ValidationRules::required().length(1, 128)),
    FieldRule::new("vat", "CIF/NIF", ValidationRules::required().length(3, 20)),
    FieldRule::new("address", "Dirección", ValidationRules::none().max_length(256)),
    FieldRule::new("city", "Ciudad", ValidationRules::none().max_length(64)),
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

impl FormSchema for CompanyFormData {
    fn rules() -> &'static [FieldRule] {
        &COMPANY_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(&self.name),
            "vat" => FieldValue::Text(&self.vat),
            "address" => FieldValue::Text(&self.address),
            "city" => FieldValue::Text(&self.city),
            "phone" => FieldValue::Text(&self.phone),
            "email" => FieldValue::Text(&self.email),
            _ => FieldValue::Flag,
        }
    }
}

// ============================================================================
// Filter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyFilter {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_carrier: Option<bool>,
}

impl ListQuery for CompanyFilter {
    fn list_params(&self) -> &ListParams {
        &self.params
    }

    fn list_params_mut(&mut self) -> &mut ListParams {
        &mut self.params
    }

    fn active_filters(&self) -> usize {
        usize::from(self.active.is_some()) + usize::from(self.is_carrier.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_names() {
        assert_eq!(Company::full_name(), "a001_company");
        assert_eq!(Company::detail_tab_key(Some(12)), "a001_company_detail_12");
        assert_eq!(Company::detail_tab_key(None), "a001_company_detail_new");
    }

    #[test]
    fn test_company_form_validation() {
        let mut form = CompanyFormData::default();
        let errors = form.validate().unwrap_err();
        assert!(errors.has("name"));
        assert!(errors.has("vat"));
        assert!(!errors.has("email"));

        form.name = "Fibra Norte S.L.".into();
        form.vat = "B12345678".into();
        form.email = "no-es-un-email".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email no válido"));

        form.email = "noc@fibranorte.es".into();
        assert!(form.validate().is_ok());
        assert_eq!(form.email_value().as_deref(), Some("noc@fibranorte.es"));
    }

    #[test]
    fn test_company_deserialize_defaults() {
        let json = r#"{"id": 3, "name": "Telco", "vat": "A1", "write_uid": 2}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert!(company.active);
        assert!(!company.is_carrier);
        assert_eq!(company.audit.write_uid, Some(2));
        assert_eq!(company.to_form().name, "Telco");
    }

    #[test]
    fn test_company_filter_counts() {
        let mut filter = CompanyFilter::default();
        assert_eq!(filter.active_filters(), 0);
        filter.is_carrier = Some(true);
        assert_eq!(filter.active_filters(), 1);
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["is_carrier"], true);
        assert_eq!(json["pageSize"], 25);
        assert!(json.get("active").is_none());
    }
}
