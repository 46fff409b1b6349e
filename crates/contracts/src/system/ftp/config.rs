use serde::{Deserialize, Serialize};

use crate::domain::common::{default_true, AuditFields, Entity, ListParams, RecordId};
use crate::shared::validation::{FieldRule, FieldValue, FormErrors, FormSchema, ValidationRules};

pub const DEFAULT_FTP_PORT: u16 = 21;

/// A remote FTP server the file manager can browse.
///
/// The password is write-only: it is accepted in the form payload and never
/// returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FtpConfig {
    pub id: RecordId,
    pub name: String,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub username: String,
    #[serde(default = "default_root")]
    pub root_path: String,
    #[serde(default = "default_true")]
    pub passive_mode: bool,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

fn default_port() -> u16 {
    DEFAULT_FTP_PORT
}

fn default_root() -> String {
    "/".to_string()
}

impl FtpConfig {
    pub fn address(&self) -> String {
        format!("{}@{}:{}", self.username, self.host, self.port)
    }
}

impl Entity for FtpConfig {
    type FormData = FtpConfigFormData;
    type Filter = ListParams;

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.host)
    }

    fn to_form(&self) -> FtpConfigFormData {
        FtpConfigFormData {
            name: self.name.clone(),
            host: self.host.clone(),
            port: Some(f64::from(self.port)),
            username: self.username.clone(),
            password: String::new(),
            root_path: self.root_path.clone(),
            passive_mode: self.passive_mode,
            active: self.active,
            creating: false,
        }
    }

    fn entity_index() -> &'static str {
        "sys"
    }

    fn collection_name() -> &'static str {
        "ftp_config"
    }

    fn endpoint() -> &'static str {
        "ftp-configs"
    }

    fn element_name() -> &'static str {
        "Servidor FTP"
    }

    fn list_name() -> &'static str {
        "Servidores FTP"
    }

    fn stale_minutes() -> u32 {
        30
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FtpConfigFormData {
    pub name: String,
    pub host: String,
    pub port: Option<f64>,
    pub username: String,
    /// Blank on update keeps the stored password
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub password: String,
    pub root_path: String,
    pub passive_mode: bool,
    pub active: bool,
    #[serde(skip)]
    pub creating: bool,
}

impl Default for FtpConfigFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            host: String::new(),
            port: Some(f64::from(DEFAULT_FTP_PORT)),
            username: String::new(),
            password: String::new(),
            root_path: default_root(),
            passive_mode: true,
            active: true,
            creating: true,
        }
    }
}

static FTP_CONFIG_RULES: [FieldRule; 5] = [
    FieldRule::new("name", "Nombre", ValidationRules::required().length(1, 64)),
    FieldRule::new("host", "Servidor", ValidationRules::required().max_length(253)),
    FieldRule::new("port", "Puerto", ValidationRules::required().range(1.0, 65535.0)),
    FieldRule::new("username", "Usuario", ValidationRules::required().max_length(64)),
    FieldRule::new("root_path", "Directorio raíz", ValidationRules::required()),
];

impl FormSchema for FtpConfigFormData {
    fn rules() -> &'static [FieldRule] {
        &FTP_CONFIG_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(&self.name),
            "host" => FieldValue::Text(&self.host),
            "port" => FieldValue::Number(self.port),
            "username" => FieldValue::Text(&self.username),
            "root_path" => FieldValue::Text(&self.root_path),
            _ => FieldValue::Flag,
        }
    }

    fn validate_extra(&self, errors: &mut FormErrors) {
        if self.host.contains("://") {
            errors.add("host", "Indique solo el nombre del servidor, sin protocolo");
        }
        if !self.root_path.trim().is_empty() && !self.root_path.trim().starts_with('/') {
            errors.add("root_path", "El directorio raíz debe empezar por /");
        }
        if self.creating && self.password.is_empty() {
            errors.add("password", "La contraseña es obligatoria");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_range() {
        let base = FtpConfigFormData {
            name: "Planos".into(),
            host: "ftp.example.net".into(),
            username: "planos".into(),
            password: "secret".into(),
            ..Default::default()
        };
        assert!(base.validate().is_ok());
        for (port, ok) in [(0.0, false), (1.0, true), (65535.0, true), (65536.0, false)] {
            let form = FtpConfigFormData {
                port: Some(port),
                ..base.clone()
            };
            assert_eq!(form.validate().is_ok(), ok, "port {}", port);
        }
    }

    #[test]
    fn test_host_without_scheme() {
        let form = FtpConfigFormData {
            name: "Planos".into(),
            host: "ftp://ftp.example.net".into(),
            username: "planos".into(),
            creating: false,
            ..Default::default()
        };
        assert!(form.validate().unwrap_err().has("host"));
    }

    #[test]
    fn test_password_never_read_back() {
        let config: FtpConfig = serde_json::from_str(
            r#"{"id": 2, "name": "Planos", "host": "ftp.example.net", "username": "planos",
                "password": "leaked"}"#,
        )
        .unwrap();
        assert_eq!(config.port, 21);
        assert_eq!(config.root_path, "/");
        assert!(config.to_form().password.is_empty());
        assert_eq!(config.address(), "planos@ftp.example.net:21");
    }
}
