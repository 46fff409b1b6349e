use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::endpoint_url;
use crate::shared::http::status_error;

fn auth_url(action: &str) -> String {
    endpoint_url(&format!("auth/{}", action))
}

async fn ensure_ok(action: &str, response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let reason = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let message = status_error(status, &reason, &body);
    log::warn!("auth/{} failed: {}", action, message);
    Err(message)
}

async fn post<B: serde::Serialize>(action: &str, body: &B) -> Result<Response, String> {
    let url = auth_url(action);
    log::debug!("POST {}", url);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    ensure_ok(action, response).await
}

pub async fn login(login: String, password: String) -> Result<LoginResponse, String> {
    let response = post("login", &LoginRequest { login, password }).await?;
    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Exchange the refresh token for a new access token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let response = post("refresh", &RefreshRequest { refresh_token }).await?;
    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Revoke the refresh token on the server
pub async fn logout(refresh_token: String) -> Result<(), String> {
    post("logout", &RefreshRequest { refresh_token }).await?;
    Ok(())
}

/// Validates an access token by asking who it belongs to
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let url = auth_url("me");
    log::debug!("GET {}", url);
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    let response = ensure_ok("me", response).await?;
    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
