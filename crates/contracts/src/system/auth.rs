use serde::{Deserialize, Serialize};

/// Credentials posted to `/api/auth/login`. The session itself lives in
/// http-only cookies set by the backend; no token ever reaches
/// application code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Returned by `/api/auth/login` and `/api/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub company_name: String,
}
