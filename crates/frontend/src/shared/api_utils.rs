//! HTTP helpers for talking to the gateway.
//!
//! Every request goes to the same origin the console was served from;
//! the gateway forwards `/api/*` upstream. Cookies are always included,
//! and a hung request is cut off after [`REQUEST_TIMEOUT_MS`] so the
//! loading indicator cannot stay up forever.

use std::fmt;
use std::future::Future;

use contracts::query::ApiErrorBody;
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Origin of the page, e.g. "https://console.example.com".
/// Empty outside a browser context.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().origin().unwrap_or_default()
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Terminal outcome of a request, after the gateway has already done
/// its one refresh-and-retry pass for expired sessions.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport never produced a response (offline, DNS, aborted).
    Network(String),
    /// No response within [`REQUEST_TIMEOUT_MS`].
    Timeout,
    /// HTTP status outside 2xx, with the server message when the body
    /// carried one.
    Status { status: u16, message: Option<String> },
    /// 2xx response whose body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    /// Text for the toast: the server-provided message when present,
    /// otherwise the caller's resource-specific fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(details) => write!(f, "network error: {}", details),
            ApiError::Timeout => write!(f, "request timed out"),
            ApiError::Status { status, message } => match message {
                Some(message) => write!(f, "HTTP {}: {}", status, message),
                None => write!(f, "HTTP {}", status),
            },
            ApiError::Decode(details) => write!(f, "unexpected response: {}", details),
        }
    }
}

async fn with_timeout<T>(
    fut: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    match select(Box::pin(fut), Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS))).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(ApiError::Status { status, message });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_status(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(ApiError::Status { status, message });
    }
    Ok(())
}

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    with_timeout(async move {
        let response = Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    })
    .await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    with_timeout(async move {
        let response = Request::post(url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    })
    .await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    with_timeout(async move {
        let response = Request::put(url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    })
    .await
}

/// POST without a payload, for session endpoints like logout.
pub async fn post_empty(url: &str) -> Result<(), ApiError> {
    with_timeout(async move {
        let response = Request::post(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_status(response).await
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::Status {
            status: 422,
            message: Some("IBAN already registered".to_string()),
        };
        assert_eq!(
            err.user_message("Failed to save bank account"),
            "IBAN already registered"
        );
    }

    #[test]
    fn transport_errors_use_the_fallback() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(
            err.user_message("Failed to load trips"),
            "Failed to load trips"
        );
        assert_eq!(
            ApiError::Timeout.user_message("Failed to load trips"),
            "Failed to load trips"
        );
    }
}
