use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AuditFields, Entity, ListParams, ListQuery, RecordId};
use crate::shared::validation::{FieldRule, FieldValue, FormSchema, ValidationRules};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitStatus {
    #[default]
    Planned,
    Active,
    Suspended,
    Decommissioned,
}

impl CircuitStatus {
    pub const ALL: [CircuitStatus; 4] = [
        CircuitStatus::Planned,
        CircuitStatus::Active,
        CircuitStatus::Suspended,
        CircuitStatus::Decommissioned,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CircuitStatus::Planned => "planned",
            CircuitStatus::Active => "active",
            CircuitStatus::Suspended => "suspended",
            CircuitStatus::Decommissioned => "decommissioned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CircuitStatus::Planned => "Planificado",
            CircuitStatus::Active => "Activo",
            CircuitStatus::Suspended => "Suspendido",
            CircuitStatus::Decommissioned => "Dado de baja",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Circuito de fibra entre el ODF de la central y el cliente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub id: RecordId,
    pub code: String,
    pub name: String,
    pub company_id: RecordId,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub bandwidth_mbps: Option<u32>,
    #[serde(default)]
    pub odf: Option<String>,
    #[serde(default)]
    pub odf_port: Option<u32>,
    #[serde(default)]
    pub status: CircuitStatus,
    #[serde(default)]
    pub installation_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for Circuit {
    type FormData = CircuitFormData;
    type Filter = CircuitFilter;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    fn to_form(&self) -> CircuitFormData {
        CircuitFormData {
            code: self.code.clone(),
            name: self.name.clone(),
            company_id: Some(self.company_id),
            bandwidth_mbps: self.bandwidth_mbps.map(f64::from),
            odf: self.odf.clone().unwrap_or_default(),
            odf_port: self.odf_port.map(f64::from),
            status: self.status,
            installation_date: self.installation_date,
        }
    }

    fn entity_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "circuit"
    }

    fn endpoint() -> &'static str {
        "circuits"
    }

    fn element_name() -> &'static str {
        "Circuito"
    }

    fn list_name() -> &'static str {
        "Circuitos"
    }

    fn stale_minutes() -> u32 {
        5
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircuitFormData {
    pub code: String,
    pub name: String,
    pub company_id: Option<RecordId>,
    pub bandwidth_mbps: Option<f64>,
    pub odf: String,
    pub odf_port: Option<f64>,
    pub status: CircuitStatus,
    pub installation_date: Option<NaiveDate>,
}

static CIRCUIT_RULES: [FieldRule; 6] = [
    FieldRule::new("code", "Código", ValidationRules::required().length(2, 32)),
    FieldRule::new("name", "Nombre", ValidationRules::required().length(1, 128)),
    FieldRule::new("company_id", "la empresa", ValidationRules::required()),
    FieldRule::new(
        "bandwidth_mbps",
        "Ancho de banda (Mbps)",
        ValidationRules::none().range(1.0, 100_000.0),
    ),
    FieldRule::new("odf", "ODF", ValidationRules::none().max_length(32)),
    FieldRule::new("odf_port", "Puerto ODF", ValidationRules::none().range(1.0, 288.0)),
];

impl FormSchema for CircuitFormData {
    fn rules() -> &'static [FieldRule] {
        &CIRCUIT_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "code" => FieldValue::Text(&self.code),
            "name" => FieldValue::Text(&self.name),
            "company_id" => FieldValue::Id(self.company_id),
            "bandwidth_mbps" => FieldValue::Number(self.bandwidth_mbps),
            "odf" => FieldValue::Text(&self.odf),
            "odf_port" => FieldValue::Number(self.odf_port),
            _ => FieldValue::Flag,
        }
    }

    fn validate_extra(&self, errors: &mut crate::shared::validation::FormErrors) {
        if self.status == CircuitStatus::Active && self.installation_date.is_none() {
            errors.add(
                "installation_date",
                "Un circuito activo necesita fecha de instalación",
            );
        }
    }
}

// ============================================================================
// Filter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircuitFilter {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<CircuitStatus>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub company_id: Option<RecordId>,
}

impl ListQuery for CircuitFilter {
    fn list_params(&self) -> &ListParams {
        &self.params
    }

    fn list_params_mut(&mut self) -> &mut ListParams {
        &mut self.params
    }

    fn active_filters(&self) -> usize {
        usize::from(self.status.is_some()) + usize::from(self.company_id.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        for status in CircuitStatus::ALL {
            assert_eq!(CircuitStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(
            serde_json::to_string(&CircuitStatus::Decommissioned).unwrap(),
            "\"decommissioned\""
        );
    }

    #[test]
    fn test_active_circuit_needs_installation_date() {
        let mut form = CircuitFormData {
            code: "CIR-001".into(),
            name: "Central Norte - Polígono".into(),
            company_id: Some(1),
            status: CircuitStatus::Active,
            ..Default::default()
        };
        assert!(form.validate().unwrap_err().has("installation_date"));

        form.installation_date = NaiveDate::from_ymd_opt(2024, 5, 2);
        assert!(form.validate().is_ok());

        form.odf_port = Some(500.0);
        assert!(form.validate().unwrap_err().has("odf_port"));
    }
}
