//! Session endpoints. The backend keeps the session in http-only
//! cookies; the gateway refreshes them transparently, so this module
//! only ever sees the final outcome.

use contracts::system::auth::{LoginRequest, UserInfo};

use crate::shared::api_utils::{api_url, fetch_json, post_empty, post_json, ApiError};

pub async fn login(email: String, password: String) -> Result<UserInfo, ApiError> {
    let request = LoginRequest { email, password };
    post_json(&api_url("/api/auth/login"), &request).await
}

pub async fn logout() -> Result<(), ApiError> {
    post_empty(&api_url("/api/auth/logout")).await
}

/// Who the current cookie session belongs to; 401 when there is none.
pub async fn current_user() -> Result<UserInfo, ApiError> {
    fetch_json(&api_url("/api/auth/me")).await
}
