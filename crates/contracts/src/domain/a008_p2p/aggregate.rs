use serde::{Deserialize, Serialize};

use crate::domain::common::{AuditFields, Entity, ListParams, RecordId};
use crate::shared::validation::{FieldRule, FieldValue, FormErrors, FormSchema, ValidationRules};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum P2pStatus {
    #[default]
    Planned,
    Operational,
    Down,
}

impl P2pStatus {
    pub const ALL: [P2pStatus; 3] = [P2pStatus::Planned, P2pStatus::Operational, P2pStatus::Down];

    pub fn code(&self) -> &'static str {
        match self {
            P2pStatus::Planned => "planned",
            P2pStatus::Operational => "operational",
            P2pStatus::Down => "down",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            P2pStatus::Planned => "Planificado",
            P2pStatus::Operational => "Operativo",
            P2pStatus::Down => "Caído",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

/// Radioenlace / tramo punto a punto entre dos emplazamientos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct P2pRecord {
    pub id: RecordId,
    pub name: String,
    pub point_a: String,
    pub point_b: String,
    #[serde(default)]
    pub link_id: Option<RecordId>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub status: P2pStatus,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for P2pRecord {
    type FormData = P2pFormData;
    type Filter = ListParams;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({} ↔ {})", self.name, self.point_a, self.point_b)
    }

    fn to_form(&self) -> P2pFormData {
        P2pFormData {
            name: self.name.clone(),
            point_a: self.point_a.clone(),
            point_b: self.point_b.clone(),
            link_id: self.link_id,
            distance_km: self.distance_km,
            status: self.status,
        }
    }

    fn entity_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "p2p"
    }

    fn endpoint() -> &'static str {
        "p2p"
    }

    fn element_name() -> &'static str {
        "Punto a punto"
    }

    fn list_name() -> &'static str {
        "Puntos a punto"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct P2pFormData {
    pub name: String,
    pub point_a: String,
    pub point_b: String,
    pub link_id: Option<RecordId>,
    pub distance_km: Option<f64>,
    pub status: P2pStatus,
}

static P2P_RULES: [FieldRule; 5] = [
    FieldRule::new("name", "Nombre", ValidationRules::required().length(1, 128)),
    FieldRule::new("point_a", "Punto A", ValidationRules::required().max_length(128)),
    FieldRule::new("point_b", "Punto B", ValidationRules::required().max_length(128)),
    FieldRule::new("link_id", "el enlace", ValidationRules::none()),
    FieldRule::new("distance_km", "Distancia (km)", ValidationRules::none().range(0.0, 500.0)),
];

impl FormSchema for P2pFormData {
    fn rules() -> &'static [FieldRule] {
        &P2P_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(&self.name),
            "point_a" => FieldValue::Text(&self.point_a),
            "point_b" => FieldValue::Text(&self.point_b),
            "link_id" => FieldValue::Id(self.link_id),
            "distance_km" => FieldValue::Number(self.distance_km),
            _ => FieldValue::Flag,
        }
    }

    fn validate_extra(&self, errors: &mut FormErrors) {
        let a = self.point_a.trim();
        if !a.is_empty() && a.eq_ignore_ascii_case(self.point_b.trim()) {
            errors.add("point_b", "Los dos extremos no pueden ser el mismo punto");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_must_differ() {
        let form = P2pFormData {
            name: "Torre 4 - Nave 2".into(),
            point_a: "Torre 4".into(),
            point_b: "torre 4 ".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err().get("point_b"),
            Some("Los dos extremos no pueden ser el mismo punto")
        );
    }
}
