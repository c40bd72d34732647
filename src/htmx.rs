/// HTMX utils
use axum::http::{HeaderMap, HeaderValue};

/// Ask htmx to reload the current page, keeping whatever `?tab=` the
/// browser's URL carries.
pub fn refresh(mut headers: HeaderMap) -> HeaderMap {
    headers.insert("Hx-Refresh", HeaderValue::from_static("true"));
    headers
}

pub fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers.contains_key("Hx-Request")
}
