//! API utilities for frontend-backend communication
//!
//! The UI is served from the same origin as the REST API.

use crate::shared::config::app_config;

/// Origin of the current page, e.g. "https://inventory.example.com"
///
/// Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Full URL of an `/api/...` endpoint
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), app_config().api.resolve(path))
}

/// Full URL with an encoded query string
pub fn api_url_with_query(path: &str, params: &[(String, String)]) -> String {
    let url = api_url(path);
    if params.is_empty() {
        return url;
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}
