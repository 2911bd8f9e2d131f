use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api::client;
use crate::shared::api::ApiError;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    client::post_json("/api/auth/login", &request).await
}

/// Get the user attached to the stored token
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    client::get_json("/api/auth/me").await
}

/// Invalidate the stored token server-side. Failures are ignored: the
/// local session is cleared regardless.
pub async fn logout() {
    if let Err(e) = client::post_value("/api/auth/logout", &serde_json::json!({})).await {
        log::warn!("logout request failed: {}", e);
    }
}
