//! `/api/*` pass-through to the backend.
//!
//! Cookies travel both ways untouched. When the upstream answers 401
//! to anything but the refresh endpoint itself, the gateway calls the
//! refresh endpoint once with the caller's cookies and retries the
//! original request with the renewed session; the renewed cookies are
//! attached to the final response so the browser picks them up. The
//! frontend only ever sees the terminal outcome.

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::response::Response;
use serde_json::json;

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Request headers worth forwarding upstream; everything hop-by-hop or
/// connection-level stays behind.
const FORWARDED_REQUEST_HEADERS: &[&str] = &["cookie", "content-type", "accept"];

#[derive(Clone)]
pub struct GatewayState {
    pub client: reqwest::Client,
    pub upstream_url: String,
    pub refresh_path: String,
}

pub async fn forward(State(state): State<GatewayState>, request: Request<Body>) -> Response {
    match forward_inner(&state, request).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("proxy error: {err:#}");
            error_response(StatusCode::BAD_GATEWAY, "Upstream unavailable")
        }
    }
}

async fn forward_inner(
    state: &GatewayState,
    request: Request<Body>,
) -> anyhow::Result<Response> {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, MAX_BODY_BYTES).await?;

    let path = parts.uri.path().to_string();
    let target = join_upstream(&state.upstream_url, &path, parts.uri.query());

    let first = send_upstream(state, &parts.method, &target, &parts.headers, &body, None).await?;

    let session_expired =
        first.status().as_u16() == 401 && !is_refresh_request(&path, &state.refresh_path);
    if !session_expired {
        return to_axum_response(first).await;
    }

    let caller_cookies = parts
        .headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let refresh_target = join_upstream(&state.upstream_url, &state.refresh_path, None);
    let mut refresh = state.client.post(&refresh_target);
    if let Some(cookies) = &caller_cookies {
        refresh = refresh.header(header::COOKIE.as_str(), cookies);
    }
    let refresh = refresh.send().await?;

    if !refresh.status().is_success() {
        // Refresh rejected: hand the original 401 through so the
        // frontend falls back to the login screen.
        return to_axum_response(first).await;
    }

    let renewed_cookies: Vec<String> = refresh
        .headers()
        .get_all(header::SET_COOKIE.as_str())
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect();

    let merged = merge_cookie_header(caller_cookies.as_deref(), &renewed_cookies);
    let retry = send_upstream(
        state,
        &parts.method,
        &target,
        &parts.headers,
        &body,
        Some(&merged),
    )
    .await?;

    let mut response = to_axum_response(retry).await?;
    for cookie in &renewed_cookies {
        if let Ok(value) = HeaderValue::from_str(cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    Ok(response)
}

async fn send_upstream(
    state: &GatewayState,
    method: &Method,
    target: &str,
    headers: &axum::http::HeaderMap,
    body: &[u8],
    cookie_override: Option<&str>,
) -> anyhow::Result<reqwest::Response> {
    let method = reqwest::Method::from_bytes(method.as_str().as_bytes())?;
    let mut upstream = state.client.request(method, target);

    for name in FORWARDED_REQUEST_HEADERS {
        if *name == "cookie" && cookie_override.is_some() {
            continue;
        }
        if let Some(value) = headers.get(*name).and_then(|v| v.to_str().ok()) {
            upstream = upstream.header(*name, value);
        }
    }
    if let Some(cookies) = cookie_override {
        upstream = upstream.header(header::COOKIE.as_str(), cookies);
    }
    if !body.is_empty() {
        upstream = upstream.body(body.to_vec());
    }

    Ok(upstream.send().await?)
}

async fn to_axum_response(upstream: reqwest::Response) -> anyhow::Result<Response> {
    let status = StatusCode::from_u16(upstream.status().as_u16())?;

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = upstream
        .headers()
        .get(header::CONTENT_TYPE.as_str())
        .and_then(|v| v.to_str().ok())
    {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let cookies: Vec<String> = upstream
        .headers()
        .get_all(header::SET_COOKIE.as_str())
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect();
    for cookie in cookies {
        builder = builder.header(header::SET_COOKIE, cookie);
    }

    let body = upstream.bytes().await?;
    Ok(builder.body(Body::from(body))?)
}

pub fn error_response(status: StatusCode, message: &str) -> Response {
    let body = json!({ "message": message }).to_string();
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("static error response")
}

/// Join the upstream base with the request path and query.
fn join_upstream(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    match query {
        Some(query) => format!("{}{}?{}", base, path, query),
        None => format!("{}{}", base, path),
    }
}

fn is_refresh_request(path: &str, refresh_path: &str) -> bool {
    path == refresh_path
}

/// Merge renewed `Set-Cookie` values into the caller's `Cookie` header:
/// same-named pairs are replaced, everything else is kept.
fn merge_cookie_header(existing: Option<&str>, set_cookies: &[String]) -> String {
    let mut pairs: Vec<(String, String)> = existing
        .unwrap_or_default()
        .split(';')
        .filter_map(|pair| {
            let pair = pair.trim();
            let (name, value) = pair.split_once('=')?;
            Some((name.to_string(), value.to_string()))
        })
        .collect();

    for set_cookie in set_cookies {
        let Some(pair) = set_cookie.split(';').next() else {
            continue;
        };
        let Some((name, value)) = pair.trim().split_once('=') else {
            continue;
        };
        if let Some(slot) = pairs.iter_mut().find(|(existing, _)| existing == name) {
            slot.1 = value.to_string();
        } else {
            pairs.push((name.to_string(), value.to_string()));
        }
    }

    pairs
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_url_keeps_path_and_query() {
        assert_eq!(
            join_upstream(
                "http://127.0.0.1:3000",
                "/api/trips",
                Some("page=1&limit=10")
            ),
            "http://127.0.0.1:3000/api/trips?page=1&limit=10"
        );
        assert_eq!(
            join_upstream("http://127.0.0.1:3000/", "/api/trips", None),
            "http://127.0.0.1:3000/api/trips"
        );
    }

    #[test]
    fn refresh_endpoint_is_never_retried() {
        assert!(is_refresh_request("/api/auth/refresh", "/api/auth/refresh"));
        assert!(!is_refresh_request("/api/trips", "/api/auth/refresh"));
    }

    #[test]
    fn renewed_cookie_replaces_the_stale_pair() {
        let merged = merge_cookie_header(
            Some("sid=stale; theme=dark"),
            &["sid=fresh; Path=/; HttpOnly".to_string()],
        );
        assert_eq!(merged, "sid=fresh; theme=dark");
    }

    #[test]
    fn renewed_cookie_is_added_when_absent() {
        let merged = merge_cookie_header(None, &["sid=fresh; Path=/".to_string()]);
        assert_eq!(merged, "sid=fresh");
    }

    #[test]
    fn cookie_attributes_are_not_forwarded_back() {
        let merged = merge_cookie_header(
            Some("theme=dark"),
            &["sid=abc; Path=/; HttpOnly; Secure".to_string()],
        );
        assert_eq!(merged, "theme=dark; sid=abc");
    }
}
