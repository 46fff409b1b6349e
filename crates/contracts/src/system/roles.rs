use serde::{Deserialize, Serialize};

use crate::domain::common::{AuditFields, Entity, ListParams, RecordId};
use crate::shared::validation::{FieldRule, FieldValue, FormErrors, FormSchema, ValidationRules};

/// Permission codes understood by the backend, with their UI labels
pub const PERMISSIONS: &[(&str, &str)] = &[
    ("commercial.read", "Comercial: consulta"),
    ("commercial.write", "Comercial: edición"),
    ("network.read", "Red: consulta"),
    ("network.write", "Red: edición"),
    ("operations.read", "Operaciones: consulta"),
    ("operations.write", "Operaciones: edición"),
    ("billing.read", "Facturación: consulta"),
    ("billing.post", "Facturación: contabilizar y facturar"),
    ("ftp.read", "FTP: descarga"),
    ("ftp.write", "FTP: subida y borrado"),
    ("admin", "Administración"),
];

pub fn permission_label(code: &str) -> &str {
    PERMISSIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, label)| label)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Role {
    pub fn has_permission(&self, code: &str) -> bool {
        self.permissions.iter().any(|p| p == code || p == "admin")
    }
}

impl Entity for Role {
    type FormData = RoleFormData;
    type Filter = ListParams;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_form(&self) -> RoleFormData {
        RoleFormData {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            permissions: self.permissions.clone(),
        }
    }

    fn entity_index() -> &'static str {
        "sys"
    }

    fn collection_name() -> &'static str {
        "role"
    }

    fn endpoint() -> &'static str {
        "roles"
    }

    fn element_name() -> &'static str {
        "Rol"
    }

    fn list_name() -> &'static str {
        "Roles"
    }

    fn stale_minutes() -> u32 {
        30
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleFormData {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl RoleFormData {
    pub fn toggle_permission(&mut self, code: &str) {
        if let Some(pos) = self.permissions.iter().position(|p| p == code) {
            self.permissions.remove(pos);
        } else {
            self.permissions.push(code.to_string());
        }
    }
}

static ROLE_RULES: [FieldRule; 2] = [
    FieldRule::new("name", "Nombre", ValidationRules::required().length(2, 64)),
    FieldRule::new("description", "Descripción", ValidationRules::none().max_length(256)),
];

impl FormSchema for RoleFormData {
    fn rules() -> &'static [FieldRule] {
        &ROLE_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(&self.name),
            "description" => FieldValue::Text(&self.description),
            _ => FieldValue::Flag,
        }
    }

    fn validate_extra(&self, errors: &mut FormErrors) {
        if let Some(unknown) = self
            .permissions
            .iter()
            .find(|p| !PERMISSIONS.iter().any(|(code, _)| code == p))
        {
            errors.add("permissions", format!("Permiso desconocido: {}", unknown));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_permission() {
        let mut form = RoleFormData {
            name: "Operaciones".into(),
            ..Default::default()
        };
        form.toggle_permission("operations.read");
        form.toggle_permission("ftp.read");
        form.toggle_permission("operations.read");
        assert_eq!(form.permissions, vec!["ftp.read".to_string()]);
        assert!(form.validate().is_ok());

        form.permissions.push("root".into());
        assert!(form.validate().unwrap_err().has("permissions"));
    }

    #[test]
    fn test_admin_implies_everything() {
        let role: Role =
            serde_json::from_str(r#"{"id": 1, "name": "Admin", "permissions": ["admin"]}"#).unwrap();
        assert!(role.has_permission("billing.post"));
        assert_eq!(permission_label("ftp.write"), "FTP: subida y borrado");
        assert_eq!(permission_label("other"), "other");
    }
}
