use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AuditFields, DateRange, Entity, ListParams, ListQuery, RecordId};
use crate::shared::validation::{FieldRule, FieldValue, FormErrors, FormSchema, ValidationRules};

// ============================================================================
// Status
// ============================================================================

/// Provisioning state of a link
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    #[default]
    Pending,
    Provisioning,
    Active,
    Suspended,
    Cancelled,
}

impl LinkStatus {
    pub const ALL: [LinkStatus; 5] = [
        LinkStatus::Pending,
        LinkStatus::Provisioning,
        LinkStatus::Active,
        LinkStatus::Suspended,
        LinkStatus::Cancelled,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LinkStatus::Pending => "pending",
            LinkStatus::Provisioning => "provisioning",
            LinkStatus::Active => "active",
            LinkStatus::Suspended => "suspended",
            LinkStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkStatus::Pending => "Pendiente",
            LinkStatus::Provisioning => "En provisión",
            LinkStatus::Active => "Activo",
            LinkStatus::Suspended => "Suspendido",
            LinkStatus::Cancelled => "Cancelado",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Links in service are billed monthly
    pub fn is_billable(&self) -> bool {
        matches!(self, LinkStatus::Active | LinkStatus::Suspended)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Enlace: a provisioned point-to-point telecom link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: RecordId,
    pub code: String,
    pub name: String,
    pub company_id: RecordId,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub link_type_id: Option<RecordId>,
    #[serde(default)]
    pub connection_type_id: Option<RecordId>,
    pub development_area_id: RecordId,
    pub location_id: RecordId,
    #[serde(default)]
    pub bandwidth_mbps: Option<u32>,
    #[serde(default)]
    pub vlan: Option<u16>,
    #[serde(default)]
    pub status: LinkStatus,
    #[serde(default)]
    pub activation_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for Link {
    type FormData = LinkFormData;
    type Filter = LinkFilter;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    fn to_form(&self) -> LinkFormData {
        LinkFormData {
            code: self.code.clone(),
            name: self.name.clone(),
            company_id: Some(self.company_id),
            link_type_id: self.link_type_id,
            connection_type_id: self.connection_type_id,
            development_area_id: Some(self.development_area_id),
            location_id: Some(self.location_id),
            bandwidth_mbps: self.bandwidth_mbps.map(f64::from),
            vlan: self.vlan.map(f64::from),
            status: self.status,
            activation_date: self.activation_date,
        }
    }

    fn entity_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "link"
    }

    fn endpoint() -> &'static str {
        "links"
    }

    fn element_name() -> &'static str {
        "Enlace"
    }

    fn list_name() -> &'static str {
        "Enlaces"
    }

    fn stale_minutes() -> u32 {
        5
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkFormData {
    pub code: String,
    pub name: String,
    pub company_id: Option<RecordId>,
    pub link_type_id: Option<RecordId>,
    pub connection_type_id: Option<RecordId>,
    pub development_area_id: Option<RecordId>,
    pub location_id: Option<RecordId>,
    pub bandwidth_mbps: Option<f64>,
    pub vlan: Option<f64>,
    pub status: LinkStatus,
    pub activation_date: Option<NaiveDate>,
}

static LINK_RULES: [FieldRule; 9] = [
    FieldRule::new("code", "Código", ValidationRules::required().length(2, 32)),
    FieldRule::new("name", "Nombre", ValidationRules::required().length(1, 128)),
    FieldRule::new("company_id", "la empresa", ValidationRules::required()),
    FieldRule::new("link_type_id", "el tipo de enlace", ValidationRules::none()),
    FieldRule::new("connection_type_id", "el tipo de conexión", ValidationRules::none()),
    FieldRule::new(
        "development_area_id",
        "el área de desarrollo",
        ValidationRules::required(),
    ),
    FieldRule::new("location_id", "la ubicación", ValidationRules::required()),
    FieldRule::new(
        "bandwidth_mbps",
        "Ancho de banda (Mbps)",
        ValidationRules::required().range(1.0, 100_000.0),
    ),
    FieldRule::new("vlan", "VLAN", ValidationRules::none().range(1.0, 4094.0)),
];

impl FormSchema for LinkFormData {
    fn rules() -> &'static [FieldRule] {
        &LINK_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "code" => FieldValue::Text(&self.code),
            "name" => FieldValue::Text(&self.name),
            "company_id" => FieldValue::Id(self.company_id),
            "link_type_id" => FieldValue::Id(self.link_type_id),
            "connection_type_id" => FieldValue::Id(self.connection_type_id),
            "development_area_id" => FieldValue::Id(self.development_area_id),
            "location_id" => FieldValue::Id(self.location_id),
            "bandwidth_mbps" => FieldValue::Number(self.bandwidth_mbps),
            "vlan" => FieldValue::Number(self.vlan),
            _ => FieldValue::Flag,
        }
    }

    fn validate_extra(&self, errors: &mut FormErrors) {
        if let Some(vlan) = self.vlan {
            if vlan.fract() != 0.0 {
                errors.add("vlan", "VLAN debe ser un número entero");
            }
        }
        if self.status == LinkStatus::Active && self.activation_date.is_none() {
            errors.add("activation_date", "Un enlace activo necesita fecha de activación");
        }
    }
}

// ============================================================================
// Filter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkFilter {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<LinkStatus>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub company_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link_type_id: Option<RecordId>,
    #[serde(flatten)]
    pub activation: DateRange,
}

impl ListQuery for LinkFilter {
    fn list_params(&self) -> &ListParams {
        &self.params
    }

    fn list_params_mut(&mut self) -> &mut ListParams {
        &mut self.params
    }

    fn active_filters(&self) -> usize {
        usize::from(self.status.is_some())
            + usize::from(self.company_id.is_some())
            + usize::from(self.link_type_id.is_some())
            + usize::from(!self.activation.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> LinkFormData {
        LinkFormData {
            code: "ENL-0042".into(),
            name: "Sede central - Nodo 3".into(),
            company_id: Some(7),
            development_area_id: Some(2),
            location_id: Some(15),
            bandwidth_mbps: Some(1000.0),
            vlan: Some(120.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_link_requires_area_and_location() {
        assert!(valid_form().validate().is_ok());

        let form = LinkFormData {
            development_area_id: None,
            location_id: Some(0),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("development_area_id"),
            Some("Debe seleccionar el área de desarrollo")
        );
        assert!(errors.has("location_id"));
    }

    #[test]
    fn test_vlan_bounds() {
        for (vlan, ok) in [(0.0, false), (1.0, true), (4094.0, true), (4095.0, false), (10.5, false)] {
            let form = LinkFormData {
                vlan: Some(vlan),
                ..valid_form()
            };
            assert_eq!(form.validate().is_ok(), ok, "vlan {}", vlan);
        }
    }

    #[test]
    fn test_link_filter_query_fields() {
        let filter = LinkFilter {
            status: Some(LinkStatus::Active),
            activation: DateRange {
                date_from: NaiveDate::from_ymd_opt(2024, 1, 1),
                date_to: None,
            },
            ..Default::default()
        };
        assert_eq!(filter.active_filters(), 2);
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["date_from"], "2024-01-01");
        assert!(json.get("date_to").is_none());
    }

    #[test]
    fn test_billable_statuses() {
        let billable: Vec<_> = LinkStatus::ALL.into_iter().filter(|s| s.is_billable()).collect();
        assert_eq!(billable, vec![LinkStatus::Active, LinkStatus::Suspended]);
    }
}
