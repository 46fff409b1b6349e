use serde::{Deserialize, Serialize};

use crate::domain::common::{default_true, AuditFields, Entity, ListParams, RecordId};
use crate::shared::validation::{FieldRule, FieldValue, FormSchema, ValidationRules};

/// Tipo de conexión (fibra, radio, cobre...). Catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionType {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for ConnectionType {
    type FormData = ConnectionTypeFormData;
    type Filter = ListParams;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_form(&self) -> ConnectionTypeFormData {
        ConnectionTypeFormData {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            active: self.active,
        }
    }

    fn entity_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "connection_type"
    }

    fn endpoint() -> &'static str {
        "connection-types"
    }

    fn element_name() -> &'static str {
        "Tipo de conexión"
    }

    fn list_name() -> &'static str {
        "Tipos de conexión"
    }

    fn stale_minutes() -> u32 {
        30
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTypeFormData {
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl Default for ConnectionTypeFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            active: true,
        }
    }
}

static CONNECTION_TYPE_RULES: [FieldRule; 2] = [
    FieldRule::new("name", "Nombre", ValidationRules::required().length(1, 64)),
    FieldRule::new("description", "Descripción", ValidationRules::none().max_length(256)),
];

impl FormSchema for ConnectionTypeFormData {
    fn rules() -> &'static [FieldRule] {
        &CONNECTION_TYPE_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(&self.name),
            "description" => FieldValue::Text(&self.description),
            _ => FieldValue::Flag,
        }
    }
}
