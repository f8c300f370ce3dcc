// src/presentation/http/session.rs
//! Where the session token travels: bearer header for API clients, an
//! HttpOnly cookie for the browser pages.

use axum::http::{HeaderMap, HeaderValue, header::InvalidHeaderValue};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};
use std::time::Duration;

pub const SESSION_COOKIE: &str = "portal_session";

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub cookie_secure: bool,
    pub gated_prefixes: Vec<String>,
    pub ttl: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            cookie_secure: false,
            gated_prefixes: vec!["/dashboard".into()],
            ttl: Duration::from_secs(86_400),
        }
    }
}

/// Bearer header wins over the cookie when both are present.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(header) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(header.token().to_string());
    }

    headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_string))
        .filter(|token| !token.is_empty())
}

pub fn session_cookie(
    token: &str,
    settings: &SessionSettings,
) -> Result<HeaderValue, InvalidHeaderValue> {
    build_cookie(token, settings.ttl.as_secs(), settings.cookie_secure)
}

pub fn clear_session_cookie(settings: &SessionSettings) -> Result<HeaderValue, InvalidHeaderValue> {
    build_cookie("", 0, settings.cookie_secure)
}

fn build_cookie(value: &str, max_age: u64, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie =
        format!("{SESSION_COOKIE}={value}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// A prefix covers itself and everything below it, but not siblings that
/// merely share the leading characters (`/dashboard` does not gate
/// `/dashboards`).
pub fn is_gated(path: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| {
        let prefix = prefix.trim_end_matches('/');
        if prefix.is_empty() {
            return true;
        }
        path == prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Only same-site absolute paths are honoured as post-login destinations.
pub fn safe_callback(raw: Option<&str>) -> &str {
    match raw {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/dashboard",
    }
}
