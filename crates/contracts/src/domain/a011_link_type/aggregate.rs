use serde::{Deserialize, Serialize};

use crate::domain::common::{default_true, AuditFields, Entity, ListParams, RecordId};
use crate::shared::validation::{FieldRule, FieldValue, FormSchema, ValidationRules};

/// Tipo de enlace (dedicado, compartido, backup...). Catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkType {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for LinkType {
    type FormData = LinkTypeFormData;
    type Filter = ListParams;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_form(&self) -> LinkTypeFormData {
        LinkTypeFormData {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            active: self.active,
        }
    }

    fn entity_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "link_type"
    }

    fn endpoint() -> &'static str {
        "link-types"
    }

    fn element_name() -> &'static str {
        "Tipo de enlace"
    }

    fn list_name() -> &'static str {
        "Tipos de enlace"
    }

    fn stale_minutes() -> u32 {
        30
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkTypeFormData {
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl Default for LinkTypeFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            active: true,
        }
    }
}

static LINK_TYPE_RULES: [FieldRule; 2] = [
    FieldRule::new("name", "Nombre", ValidationRules::required().length(1, 64)),
    FieldRule::new("description", "Descripción", ValidationRules::none().max_length(256)),
];

impl FormSchema for LinkTypeFormData {
    fn rules() -> &'static [FieldRule] {
        &LINK_TYPE_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(&self.name),
            "description" => FieldValue::Text(&self.description),
            _ => FieldValue::Flag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::entity::parse_detail_tab_key;

    #[test]
    fn test_detail_tab_key_round_trip() {
        let key = LinkType::detail_tab_key(Some(31));
        assert_eq!(key, "a011_link_type_detail_31");
        assert_eq!(parse_detail_tab_key::<LinkType>(&key), Some(Some(31)));
        assert_eq!(
            parse_detail_tab_key::<LinkType>("a011_link_type_detail_new"),
            Some(None)
        );
        assert_eq!(parse_detail_tab_key::<LinkType>("a001_company_detail_3"), None);
    }
}
