//! Where the API base URL lives. Each browser keeps its own copy in a
//! long-lived cookie, so the value survives restarts of both the browser and
//! this server.

use super::config::{API_BASE_COOKIE, API_BASE_MAX_AGE_SECS};
use anyhow::Result;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::SET_COOKIE, request::Parts, HeaderMap, HeaderValue},
};
use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use std::convert::Infallible;

/// Read the saved base URL out of a `Cookie` header. Anything missing or
/// garbled reads as unset.
pub fn get(cookie_header: Option<&str>) -> String {
    let Some(cookies) = cookie_header else {
        return String::new();
    };
    let Ok(re) = Regex::new(&format!(r"(?:^|;\s*){API_BASE_COOKIE}=([^;]*)"))
    else {
        return String::new();
    };
    re.captures(cookies)
        .and_then(|c| c.get(1))
        .and_then(|m| general_purpose::URL_SAFE_NO_PAD.decode(m.as_str()).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

/// Normalize and persist `value`. Trailing slashes are dropped so that
/// appending a `/path` never produces `//`.
pub fn set(value: &str) -> Result<HeaderMap> {
    let value = normalize(value);
    let encoded = general_purpose::URL_SAFE_NO_PAD.encode(value.as_bytes());
    let cookie = format!(
        "{API_BASE_COOKIE}={encoded}; Max-Age={API_BASE_MAX_AGE_SECS}; Path=/; SameSite=Lax"
    );
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, HeaderValue::from_str(&cookie)?);

    Ok(headers)
}

pub fn normalize(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

/// The calling browser's saved base URL, empty when none was saved.
pub struct ApiBase(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ApiBase
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        req: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let cookie = req
            .headers
            .get_all("Cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<&str>>()
            .join("; ");
        Ok(ApiBase(get(Some(&cookie))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie_value(headers: &HeaderMap) -> String {
        let set_cookie = headers
            .get(SET_COOKIE)
            .expect("set-cookie header")
            .to_str()
            .expect("ascii");
        set_cookie
            .split(';')
            .next()
            .expect("name=value")
            .to_string()
    }

    #[test]
    fn test_unset_reads_as_empty() {
        assert_eq!(get(None), "");
        assert_eq!(get(Some("theme=dark")), "");
    }

    #[test]
    fn test_round_trip_through_cookie() {
        let headers = set("https://api.example.com/v1").expect("valid header");
        let cookie = format!("theme=dark; {}", cookie_value(&headers));

        assert_eq!(get(Some(&cookie)), "https://api.example.com/v1");
    }

    #[test]
    fn test_set_trims_whitespace_and_trailing_slash() {
        let headers = set("  https://api.example.com/ ").expect("valid header");

        assert_eq!(
            get(Some(&cookie_value(&headers))),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_cookie_is_durable() {
        let headers = set("https://api.example.com").expect("valid header");
        let set_cookie = headers.get(SET_COOKIE).expect("set-cookie").to_str().expect("ascii");

        assert!(set_cookie.contains("Max-Age=315360000"));
        assert!(set_cookie.contains("Path=/"));
    }

    #[test]
    fn test_garbled_cookie_reads_as_empty() {
        assert_eq!(get(Some(&format!("{API_BASE_COOKIE}=%%%"))), "");
    }

    #[test]
    fn test_similarly_named_cookie_is_ignored() {
        let encoded = general_purpose::URL_SAFE_NO_PAD.encode("https://other");
        assert_eq!(get(Some(&format!("old_{API_BASE_COOKIE}={encoded}"))), "");
    }
}
