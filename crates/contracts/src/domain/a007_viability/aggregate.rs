use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AuditFields, DateRange, Entity, ListParams, ListQuery, RecordId};
use crate::shared::validation::{FieldRule, FieldValue, FormErrors, FormSchema, ValidationRules};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViabilityStatus {
    #[default]
    Requested,
    UnderStudy,
    Viable,
    NotViable,
    Cancelled,
}

impl ViabilityStatus {
    pub const ALL: [ViabilityStatus; 5] = [
        ViabilityStatus::Requested,
        ViabilityStatus::UnderStudy,
        ViabilityStatus::Viable,
        ViabilityStatus::NotViable,
        ViabilityStatus::Cancelled,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ViabilityStatus::Requested => "requested",
            ViabilityStatus::UnderStudy => "under_study",
            ViabilityStatus::Viable => "viable",
            ViabilityStatus::NotViable => "not_viable",
            ViabilityStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViabilityStatus::Requested => "Solicitada",
            ViabilityStatus::UnderStudy => "En estudio",
            ViabilityStatus::Viable => "Viable",
            ViabilityStatus::NotViable => "No viable",
            ViabilityStatus::Cancelled => "Cancelada",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Only viable requests can be turned into a service order
    pub fn can_create_order(&self) -> bool {
        *self == ViabilityStatus::Viable
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Solicitud de viabilidad técnica para un nuevo servicio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViabilityRequest {
    pub id: RecordId,
    /// Assigned by the backend on creation
    pub number: String,
    pub company_id: RecordId,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub contact_id: Option<RecordId>,
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub requested_bandwidth_mbps: u32,
    #[serde(default)]
    pub connection_type_id: Option<RecordId>,
    #[serde(default)]
    pub link_type_id: Option<RecordId>,
    #[serde(default)]
    pub status: ViabilityStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub requested_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ViabilityRequest {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

impl Entity for ViabilityRequest {
    type FormData = ViabilityFormData;
    type Filter = ViabilityFilter;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.number, self.address)
    }

    fn to_form(&self) -> ViabilityFormData {
        ViabilityFormData {
            company_id: Some(self.company_id),
            contact_id: self.contact_id,
            address: self.address.clone(),
            city: self.city.clone().unwrap_or_default(),
            latitude: self.latitude,
            longitude: self.longitude,
            requested_bandwidth_mbps: Some(f64::from(self.requested_bandwidth_mbps)),
            connection_type_id: self.connection_type_id,
            link_type_id: self.link_type_id,
            status: self.status,
            notes: self.notes.clone().unwrap_or_default(),
            requested_date: self.requested_date,
        }
    }

    fn entity_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "viability"
    }

    fn endpoint() -> &'static str {
        "viabilities"
    }

    fn element_name() -> &'static str {
        "Viabilidad"
    }

    fn list_name() -> &'static str {
        "Viabilidades"
    }

    fn stale_minutes() -> u32 {
        5
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViabilityFormData {
    pub company_id: Option<RecordId>,
    pub contact_id: Option<RecordId>,
    pub address: String,
    pub city: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub requested_bandwidth_mbps: Option<f64>,
    pub connection_type_id: Option<RecordId>,
    pub link_type_id: Option<RecordId>,
    pub status: ViabilityStatus,
    pub notes: String,
    pub requested_date: Option<NaiveDate>,
}

static VIABILITY_RULES: [FieldRule; 10] = [
    FieldRule::new("company_id", "la empresa", ValidationRules::required()),
    FieldRule::new("contact_id", "el contacto", ValidationRules::none()),
    FieldRule::new("address", "Dirección", ValidationRules::required().length(5, 256)),
    FieldRule::new("city", "Ciudad", ValidationRules::required().max_length(64)),
    FieldRule::new("latitude", "Latitud", ValidationRules::none().range(-90.0, 90.0)),
    FieldRule::new("longitude", "Longitud", ValidationRules::none().range(-180.0, 180.0)),
    FieldRule::new(
        "requested_bandwidth_mbps",
        "Ancho de banda solicitado (Mbps)",
        ValidationRules::required().range(1.0, 100_000.0),
    ),
    FieldRule::new("connection_type_id", "el tipo de conexión", ValidationRules::required()),
    FieldRule::new("link_type_id", "el tipo de enlace", ValidationRules::none()),
    FieldRule::new("notes", "Observaciones", ValidationRules::none().max_length(2000)),
];

impl FormSchema for ViabilityFormData {
    fn rules() -> &'static [FieldRule] {
        &VIABILITY_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "company_id" => FieldValue::Id(self.company_id),
            "contact_id" => FieldValue::Id(self.contact_id),
            "address" => FieldValue::Text(&self.address),
            "city" => FieldValue::Text(&self.city),
            "latitude" => FieldValue::Number(self.latitude),
            "longitude" => FieldValue::Number(self.longitude),
            "requested_bandwidth_mbps" => FieldValue::Number(self.requested_bandwidth_mbps),
            "connection_type_id" => FieldValue::Id(self.connection_type_id),
            "link_type_id" => FieldValue::Id(self.link_type_id),
            "notes" => FieldValue::Text(&self.notes),
            _ => FieldValue::Flag,
        }
    }

    fn validate_extra(&self, errors: &mut FormErrors) {
        // Coordinates are optional but only meaningful as a pair
        match (self.latitude, self.longitude) {
            (Some(_), None) => errors.add("longitude", "Indique también la longitud"),
            (None, Some(_)) => errors.add("latitude", "Indique también la latitud"),
            _ => {}
        }
    }
}

// ============================================================================
// Filter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViabilityFilter {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<ViabilityStatus>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub company_id: Option<RecordId>,
    #[serde(flatten)]
    pub requested: DateRange,
}

impl ListQuery for ViabilityFilter {
    fn list_params(&self) -> &ListParams {
        &self.params
    }

    fn list_params_mut(&mut self) -> &mut ListParams {
        &mut self.params
    }

    fn active_filters(&self) -> usize {
        usize::from(self.status.is_some())
            + usize::from(self.company_id.is_some())
            + usize::from(!self.requested.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ViabilityFormData {
        ViabilityFormData {
            company_id: Some(1),
            address: "Calle Mayor 12".into(),
            city: "Zaragoza".into(),
            requested_bandwidth_mbps: Some(300.0),
            connection_type_id: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_coordinate_bounds() {
        assert!(valid_form().validate().is_ok());

        let cases = [
            (Some(-90.0), Some(-180.0), true),
            (Some(90.0), Some(180.0), true),
            (Some(90.1), Some(0.0), false),
            (Some(0.0), Some(-180.5), false),
            (Some(41.65), None, false),
        ];
        for (latitude, longitude, ok) in cases {
            let form = ViabilityFormData {
                latitude,
                longitude,
                ..valid_form()
            };
            assert_eq!(form.validate().is_ok(), ok, "{:?} {:?}", latitude, longitude);
        }
    }

    #[test]
    fn test_validate_fields_subset() {
        let form = ViabilityFormData::default();
        let errors = form.validate_fields(&["company_id", "contact_id"]).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["company_id"]);
    }

    #[test]
    fn test_coordinates() {
        let request: ViabilityRequest = serde_json::from_str(
            r#"{"id": 5, "number": "VIA-0005", "company_id": 1, "address": "Calle Mayor 12",
                "requested_bandwidth_mbps": 100, "latitude": 41.65, "longitude": -0.88}"#,
        )
        .unwrap();
        assert_eq!(request.coordinates(), Some((41.65, -0.88)));
        assert_eq!(request.status, ViabilityStatus::Requested);
        assert!(!request.status.can_create_order());
    }
}
