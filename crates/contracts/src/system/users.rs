use serde::{Deserialize, Serialize};

use crate::domain::common::{default_true, AuditFields, Entity, ListParams, ListQuery, RecordId};
use crate::shared::validation::{
    FieldRule, FieldValue, FormErrors, FormSchema, ValidationRules, EMAIL_PATTERN,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub login: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role_id: Option<RecordId>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for User {
    type FormData = UserFormData;
    type Filter = UserFilter;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.login)
    }

    fn to_form(&self) -> UserFormData {
        UserFormData {
            login: self.login.clone(),
            name: self.name.clone(),
            email: self.email.clone().unwrap_or_default(),
            role_id: self.role_id,
            active: self.active,
            password: String::new(),
            creating: false,
        }
    }

    fn entity_index() -> &'static str {
        "sys"
    }

    fn collection_name() -> &'static str {
        "user"
    }

    fn endpoint() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "Usuario"
    }

    fn list_name() -> &'static str {
        "Usuarios"
    }
}

/// Create/update payload. The password is only sent when set; on update a
/// blank password keeps the current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFormData {
    pub login: String,
    pub name: String,
    pub email: String,
    pub role_id: Option<RecordId>,
    pub active: bool,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub password: String,
    #[serde(skip)]
    pub creating: bool,
}

impl Default for UserFormData {
    fn default() -> Self {
        Self {
            login: String::new(),
            name: String::new(),
            email: String::new(),
            role_id: None,
            active: true,
            password: String::new(),
            creating: true,
        }
    }
}

static USER_RULES: [FieldRule; 4] = [
    FieldRule::new("login", "Usuario", ValidationRules::required().length(3, 64)),
    FieldRule::new("name", "Nombre", ValidationRules::required().length(1, 128)),
    FieldRule::new(
        "email",
        "Email",
        ValidationRules::none().pattern(EMAIL_PATTERN, "Email no válido"),
    ),
    FieldRule::new("role_id", "el rol", ValidationRules::required()),
];

impl FormSchema for UserFormData {
    fn rules() -> &'static [FieldRule] {
        &USER_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "login" => FieldValue::Text(&self.login),
            "name" => FieldValue::Text(&self.name),
            "email" => FieldValue::Text(&self.email),
            "role_id" => FieldValue::Id(self.role_id),
            _ => FieldValue::Flag,
        }
    }

    fn validate_extra(&self, errors: &mut FormErrors) {
        if self.login.contains(char::is_whitespace) {
            errors.add("login", "El usuario no puede contener espacios");
        }
        let len = self.password.chars().count();
        if self.creating && len == 0 {
            errors.add("password", "La contraseña es obligatoria");
        } else if len > 0 && len < MIN_PASSWORD_LENGTH {
            errors.add(
                "password",
                format!(
                    "Contraseña debe tener al menos {} caracteres",
                    MIN_PASSWORD_LENGTH
                ),
            );
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFilter {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role_id: Option<RecordId>,
}

impl ListQuery for UserFilter {
    fn list_params(&self) -> &ListParams {
        &self.params
    }

    fn list_params_mut(&mut self) -> &mut ListParams {
        &mut self.params
    }

    fn active_filters(&self) -> usize {
        usize::from(self.role_id.is_some())
    }
}

/// Admin reset of another user's password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    pub user_id: RecordId,
    pub old_password: Option<String>, // None if admin changing someone else's password
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> UserFormData {
        UserFormData {
            login: "mgarcia".into(),
            name: "María García".into(),
            role_id: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_password_required_on_create_only() {
        let errors = form().validate().unwrap_err();
        assert_eq!(errors.get("password"), Some("La contraseña es obligatoria"));

        let editing = UserFormData {
            creating: false,
            ..form()
        };
        assert!(editing.validate().is_ok());

        let short = UserFormData {
            password: "1234".into(),
            ..editing
        };
        assert!(short.validate().unwrap_err().has("password"));
    }

    #[test]
    fn test_blank_password_not_sent() {
        let editing = UserFormData {
            creating: false,
            ..form()
        };
        let json = serde_json::to_value(&editing).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("creating").is_none());
    }

    #[test]
    fn test_login_without_spaces() {
        let f = UserFormData {
            login: "m garcia".into(),
            password: "s3cr3t-pass".into(),
            ..form()
        };
        assert!(f.validate().unwrap_err().has("login"));
    }
}
