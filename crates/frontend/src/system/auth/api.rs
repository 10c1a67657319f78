use contracts::system::auth::{TokenResponse, UserInfo, UserRoles};
use gloo_net::http::Request;

use crate::shared::api::get_json;
use crate::shared::api_utils::api_url;

/// Exchange username and password for an API token (basic auth)
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, String> {
    let credentials = web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .btoa(&format!("{}:{}", username, password))
        .map_err(|_| "Credentials contain unsupported characters".to_string())?;

    let response = Request::get(&api_url("/api/user/token/"))
        .header("Authorization", &format!("Basic {}", credentials))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Get current user info (uses the stored token)
pub async fn get_current_user() -> Result<UserInfo, String> {
    get_json("/api/user/me/", &[]).await
}

pub async fn get_roles() -> Result<UserRoles, String> {
    get_json("/api/user/roles/", &[]).await
}
