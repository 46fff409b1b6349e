use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// True while stored tokens are being checked on startup
    pub restoring: bool,
}

impl AuthState {
    pub fn signed_in(access_token: String, user_info: UserInfo) -> Self {
        Self {
            access_token: Some(access_token),
            user_info: Some(user_info),
            restoring: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }

    pub fn user_label(&self) -> String {
        self.user_info
            .as_ref()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    }
}

/// Rebuild a session from stored tokens.
///
/// An invalid access token is replaced through the refresh token; when that
/// fails too the stored tokens are dropped.
async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;
    if let Ok(user) = api::get_current_user(&access_token).await {
        return Some(AuthState::signed_in(access_token, user));
    }

    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return None;
    };
    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            match api::get_current_user(&response.access_token).await {
                Ok(user) => Some(AuthState::signed_in(response.access_token, user)),
                Err(e) => {
                    log::warn!("session restore failed after refresh: {}", e);
                    storage::clear_tokens();
                    None
                }
            }
        }
        Err(e) => {
            log::info!("stored session expired: {}", e);
            storage::clear_tokens();
            None
        }
    }
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: storage::get_access_token().is_some(),
        ..Default::default()
    });

    Effect::new(move |_| {
        if !auth_state.get_untracked().restoring {
            return;
        }
        spawn_local(async move {
            let restored = restore_session().await.unwrap_or_default();
            set_auth_state.set(restored);
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn is_admin() -> bool {
    let (auth_state, _) = use_auth();
    auth_state.with(|s| s.is_admin())
}

pub async fn do_login(
    login: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(login, password).await?;
    storage::save_session(&response.access_token, &response.refresh_token);
    log::info!("signed in as {}", response.user.login);
    set_auth_state.set(AuthState::signed_in(response.access_token, response.user));
    Ok(())
}

/// Tokens are cleared even if the server could not revoke the refresh token
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout: {}", e);
        }
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> UserInfo {
        UserInfo {
            id: 1,
            login: "mgarcia".into(),
            name: Some("María García".into()),
            email: None,
            role_name: None,
            is_admin,
        }
    }

    #[test]
    fn test_default_state_is_signed_out() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
        assert_eq!(state.user_label(), "");
    }

    #[test]
    fn test_signed_in_state() {
        let state = AuthState::signed_in("token".into(), user(true));
        assert!(state.is_authenticated());
        assert!(state.is_admin());
        assert!(!state.restoring);
        assert_eq!(state.user_label(), "María García");
        assert!(!AuthState::signed_in("token".into(), user(false)).is_admin());
    }
}
