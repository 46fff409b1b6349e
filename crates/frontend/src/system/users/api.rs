use contracts::domain::common::RecordId;
use contracts::system::users::{ChangePasswordDto, User, MIN_PASSWORD_LENGTH};

use crate::shared::api_utils::endpoint_url;
use crate::shared::entity_client::{use_entity_api, EntityClient};
use crate::shared::http;

pub fn use_user_api() -> EntityClient<User> {
    use_entity_api::<User>()
}

pub fn check_new_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Contraseña debe tener al menos {} caracteres",
            MIN_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

/// Admin reset: sets a new password without knowing the old one
pub async fn reset_password(user_id: RecordId, new_password: String) -> Result<(), String> {
    check_new_password(&new_password)?;
    let dto = ChangePasswordDto {
        user_id,
        old_password: None,
        new_password,
    };
    let url = format!("{}/{}/change-password", endpoint_url("users"), user_id);
    http::post_json::<_, serde_json::Value>(&url, &dto).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_new_password() {
        assert!(check_new_password("corta").is_err());
        assert!(check_new_password("suficiente").is_ok());
    }
}
