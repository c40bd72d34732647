use super::api_client::Transport;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Shared by every request; the base URL it talks to comes from each
    /// browser's config cookie.
    pub transport: Arc<dyn Transport>,
}

/// For display-only columns the server may send as a string, a number or
/// not at all. Whatever arrives is shown as text; it never rejects the
/// record it belongs to.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
