//! API URL construction.
//!
//! The backend listens on [`API_PORT`] of the host serving the frontend. A
//! value stored under [`API_BASE_OVERRIDE_KEY`] in `localStorage` replaces the
//! derived base (useful against a remote backend during development).

use super::config::{API_BASE_OVERRIDE_KEY, API_PORT, API_PREFIX};

/// Base URL for API requests, like "http://localhost:3000".
///
/// Returns an empty string when there is no window (unit tests).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };

    if let Some(base) = stored_override(&window) {
        return base;
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

fn stored_override(window: &web_sys::Window) -> Option<String> {
    let storage = window.local_storage().ok()??;
    let value = storage.get_item(API_BASE_OVERRIDE_KEY).ok()??;
    normalize_base(&value)
}

/// Trim whitespace and trailing slashes; blank means "no override"
fn normalize_base(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build a full API URL from a path that starts with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL of a REST collection, e.g. `/api/companies`
pub fn endpoint_url(endpoint: &str) -> String {
    api_url(&format!("{}/{}", API_PREFIX, endpoint))
}

/// Append a serialized query to a URL, skipping an empty query
pub fn with_query(url: String, query: &str) -> String {
    if query.is_empty() {
        url
    } else {
        format!("{}?{}", url, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("   "), None);
        assert_eq!(
            normalize_base(" https://api.example.com/ "),
            Some("https://api.example.com".to_string())
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/api/links".into(), ""), "/api/links");
        assert_eq!(
            with_query("/api/links".into(), "page=2&pageSize=25"),
            "/api/links?page=2&pageSize=25"
        );
    }
}
