//! Thin request helpers over `gloo-net` shared by every data-access hook.
//!
//! All helpers attach the bearer token when a session exists and turn any
//! non-2xx response into `"HTTP <status>: <body or reason>"`.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::system::auth::storage;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Error message for a failed response. The body is preferred over the
/// status text because the backend puts its validation messages there.
pub fn status_error(status: u16, reason: &str, body: &str) -> String {
    let body = body.trim();
    let detail = if body.is_empty() { reason.trim() } else { body };
    if detail.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, detail)
    }
}

async fn check(method: &str, url: &str, response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let reason = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let message = status_error(status, &reason, &body);
    log::warn!("{} {} failed: {}", method, url, message);
    Err(message)
}

async fn send(method: &str, url: &str, builder: RequestBuilder) -> Result<Response, String> {
    log::debug!("{} {}", method, url);
    let response = with_auth(builder).send().await.map_err(|e| {
        log::warn!("{} {} failed: {}", method, url, e);
        format!("Failed to send request: {}", e)
    })?;
    check(method, url, response).await
}

async fn send_body<B: Serialize>(
    method: &str,
    url: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, String> {
    log::debug!("{} {}", method, url);
    let request = with_auth(builder)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = request.send().await.map_err(|e| {
        log::warn!("{} {} failed: {}", method, url, e);
        format!("Failed to send request: {}", e)
    })?;
    check(method, url, response).await
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = send("GET", url, Request::get(url)).await?;
    parse(response).await
}

/// GET that treats 404 as "no such record"
pub async fn get_optional<T: DeserializeOwned>(url: &str) -> Result<Option<T>, String> {
    log::debug!("GET {}", url);
    let response = with_auth(Request::get(url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if response.status() == 404 {
        return Ok(None);
    }
    let response = check("GET", url, response).await?;
    parse(response).await.map(Some)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = send_body("POST", url, Request::post(url), body).await?;
    parse(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = send_body("PUT", url, Request::put(url), body).await?;
    parse(response).await
}

pub async fn delete(url: &str) -> Result<(), String> {
    send("DELETE", url, Request::delete(url)).await?;
    Ok(())
}

/// DELETE that returns a JSON body (FTP actions)
pub async fn delete_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = send("DELETE", url, Request::delete(url)).await?;
    parse(response).await
}

/// Multipart upload; the browser sets the boundary header itself
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    form: web_sys::FormData,
) -> Result<T, String> {
    log::debug!("POST {} (multipart)", url);
    let request = with_auth(Request::post(url))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    let response = check("POST", url, response).await?;
    parse(response).await
}

/// Raw response bytes (file downloads)
pub async fn get_bytes(url: &str) -> Result<Vec<u8>, String> {
    let response = send("GET", url, Request::get(url)).await?;
    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_body() {
        assert_eq!(
            status_error(422, "Unprocessable Entity", "El CIF ya existe"),
            "HTTP 422: El CIF ya existe"
        );
    }

    #[test]
    fn test_status_error_falls_back_to_reason() {
        assert_eq!(
            status_error(500, "Internal Server Error", "  "),
            "HTTP 500: Internal Server Error"
        );
        assert_eq!(status_error(502, "", ""), "HTTP 502");
    }
}
