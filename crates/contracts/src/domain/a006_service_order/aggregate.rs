use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AuditFields, DateRange, Entity, ListParams, ListQuery, RecordId};
use crate::shared::validation::{FieldRule, FieldValue, FormErrors, FormSchema, ValidationRules};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    #[default]
    Installation,
    Modification,
    Removal,
    Maintenance,
}

impl OrderType {
    pub const ALL: [OrderType; 4] = [
        OrderType::Installation,
        OrderType::Modification,
        OrderType::Removal,
        OrderType::Maintenance,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            OrderType::Installation => "installation",
            OrderType::Modification => "modification",
            OrderType::Removal => "removal",
            OrderType::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Installation => "Alta",
            OrderType::Modification => "Modificación",
            OrderType::Removal => "Baja",
            OrderType::Maintenance => "Mantenimiento",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Draft,
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Draft,
        OrderStatus::Scheduled,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Scheduled => "scheduled",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Borrador",
            OrderStatus::Scheduled => "Programada",
            OrderStatus::InProgress => "En curso",
            OrderStatus::Completed => "Completada",
            OrderStatus::Cancelled => "Cancelada",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Closed orders can no longer be edited
    pub fn is_closed(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Orden de servicio (OS)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: RecordId,
    pub number: String,
    pub company_id: RecordId,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub viability_id: Option<RecordId>,
    #[serde(default)]
    pub link_id: Option<RecordId>,
    #[serde(default)]
    pub contractor_id: Option<RecordId>,
    #[serde(default)]
    pub order_type: OrderType,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for ServiceOrder {
    type FormData = ServiceOrderFormData;
    type Filter = ServiceOrderFilter;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("OS {}", self.number)
    }

    fn to_form(&self) -> ServiceOrderFormData {
        ServiceOrderFormData {
            number: self.number.clone(),
            company_id: Some(self.company_id),
            viability_id: self.viability_id,
            link_id: self.link_id,
            contractor_id: self.contractor_id,
            order_type: self.order_type,
            status: self.status,
            scheduled_date: self.scheduled_date,
            description: self.description.clone().unwrap_or_default(),
        }
    }

    fn entity_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "service_order"
    }

    fn endpoint() -> &'static str {
        "service-orders"
    }

    fn element_name() -> &'static str {
        "Orden de servicio"
    }

    fn list_name() -> &'static str {
        "Órdenes de servicio"
    }

    fn stale_minutes() -> u32 {
        5
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrderFormData {
    pub number: String,
    pub company_id: Option<RecordId>,
    pub viability_id: Option<RecordId>,
    pub link_id: Option<RecordId>,
    pub contractor_id: Option<RecordId>,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub scheduled_date: Option<NaiveDate>,
    pub description: String,
}

static SERVICE_ORDER_RULES: [FieldRule; 6] = [
    FieldRule::new("number", "Número", ValidationRules::required().length(1, 32)),
    FieldRule::new("company_id", "la empresa", ValidationRules::required()),
    FieldRule::new("viability_id", "la viabilidad", ValidationRules::none()),
    FieldRule::new("link_id", "el enlace", ValidationRules::none()),
    FieldRule::new("contractor_id", "la contrata", ValidationRules::none()),
    FieldRule::new("description", "Descripción", ValidationRules::none().max_length(2000)),
];

impl FormSchema for ServiceOrderFormData {
    fn rules() -> &'static [FieldRule] {
        &SERVICE_ORDER_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "number" => FieldValue::Text(&self.number),
            "company_id" => FieldValue::Id(self.company_id),
            "viability_id" => FieldValue::Id(self.viability_id),
            "link_id" => FieldValue::Id(self.link_id),
            "contractor_id" => FieldValue::Id(self.contractor_id),
            "description" => FieldValue::Text(&self.description),
            _ => FieldValue::Flag,
        }
    }

    fn validate_extra(&self, errors: &mut FormErrors) {
        if self.status == OrderStatus::Scheduled && self.scheduled_date.is_none() {
            errors.add("scheduled_date", "Indique la fecha programada");
        }
        if self.status == OrderStatus::InProgress && self.contractor_id.is_none() {
            errors.add("contractor_id", "Una orden en curso necesita contrata");
        }
        if matches!(self.order_type, OrderType::Modification | OrderType::Removal)
            && self.link_id.is_none()
        {
            errors.add("link_id", "Las modificaciones y bajas deben indicar el enlace");
        }
    }
}

// ============================================================================
// Filter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrderFilter {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub company_id: Option<RecordId>,
    #[serde(flatten)]
    pub scheduled: DateRange,
}

impl ListQuery for ServiceOrderFilter {
    fn list_params(&self) -> &ListParams {
        &self.params
    }

    fn list_params_mut(&mut self) -> &mut ListParams {
        &mut self.params
    }

    fn active_filters(&self) -> usize {
        usize::from(self.status.is_some())
            + usize::from(self.company_id.is_some())
            + usize::from(!self.scheduled.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_requires_link() {
        let form = ServiceOrderFormData {
            number: "OS-2024-118".into(),
            company_id: Some(3),
            order_type: OrderType::Removal,
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["link_id"]);

        let form = ServiceOrderFormData {
            link_id: Some(9),
            ..form
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_status_rules() {
        let form = ServiceOrderFormData {
            number: "OS-1".into(),
            company_id: Some(3),
            status: OrderStatus::InProgress,
            ..Default::default()
        };
        assert!(form.validate().unwrap_err().has("contractor_id"));
        assert!(OrderStatus::Cancelled.is_closed());
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(OrderStatus::from_code("in_progress"), Some(OrderStatus::InProgress));
    }
}
