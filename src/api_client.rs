//! HTTP client for the rental REST API.
//!
//! Every call goes through [`ApiClient::call`], which owns the error policy:
//! a missing base URL fails before anything is sent, bodies that aren't JSON
//! degrade to raw text, and non-2xx statuses surface the server's `error`
//! field when it has one.

use async_trait::async_trait;
use axum::http::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API base URL is not configured; set it above and save")]
    MissingBaseUrl,
    #[error("{0}")]
    Transport(String),
    /// `message` is already the user-facing text, either the server's
    /// `error` field or `HTTP <code>`.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response from {resource}: {detail}")]
    UnexpectedShape { resource: String, detail: String },
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub content_type: &'static str,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The wire underneath [`ApiClient`]. Production uses [`ReqwestTransport`];
/// tests swap in an in-memory API.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .header(reqwest::header::CONTENT_TYPE, request.content_type);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                format!("could not reach {}", request.url)
            } else {
                e.to_string()
            }
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok(HttpResponse { status, body })
    }
}

pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// `path` is appended to the base URL as-is, so it must already be a
    /// well-formed path starting with `/`.
    pub async fn call(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::MissingBaseUrl);
        }
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "calling API");

        let request = HttpRequest {
            method: method.clone(),
            url: url.clone(),
            content_type: "application/json",
            body: body.map(Value::to_string),
        };
        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "API transport failure");
            ClientError::Transport(e)
        })?;

        let parsed = parse_body(&response.body);
        if !(200..300).contains(&response.status) {
            let message = error_message(response.status, &parsed);
            tracing::warn!(
                %method,
                %url,
                status = response.status,
                %message,
                "API returned an error status"
            );
            return Err(ClientError::Status {
                status: response.status,
                message,
            });
        }

        Ok(parsed)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let value = self.call(path, Method::GET, None).await?;
        decode(path, value)
    }
}

fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn error_message(status: u16, body: &Value) -> String {
    match body.get("error") {
        Some(Value::String(message)) => message.clone(),
        _ => format!("HTTP {status}"),
    }
}

/// Decode a response into a typed record, naming the resource on failure
/// instead of rendering a half-empty row.
pub fn decode<T: DeserializeOwned>(resource: &str, value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::UnexpectedShape {
        resource: resource.to_string(),
        detail: e.to_string(),
    })
}


#[cfg(test)]
mod tests {
    use super::testing::FakeApi;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_path_is_appended_to_base_exactly_once() {
        let api = FakeApi::new();
        let client = ApiClient::new("https://api.example.com", api.clone());

        client
            .call("/properties", Method::GET, None)
            .await
            .expect("list succeeds");

        assert_eq!(api.urls(), vec!["GET https://api.example.com/properties"]);
    }

    #[tokio::test]
    async fn test_missing_base_url_fails_without_a_request() {
        let api = FakeApi::new();
        let client = ApiClient::new("", api.clone());

        let err = client
            .call("/properties", Method::GET, None)
            .await
            .expect_err("no base url");

        assert!(matches!(err, ClientError::MissingBaseUrl));
        assert!(err.to_string().contains("API base URL"));
        assert!(api.urls().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_field_becomes_the_message() {
        let api = FakeApi::new();
        api.respond_with(400, r#"{"error":"bad address"}"#);
        let client = ApiClient::new("https://api.example.com", api);

        let err = client
            .call("/properties", Method::POST, Some(&json!({ "address": "" })))
            .await
            .expect_err("400");

        assert_eq!(err.to_string(), "bad address");
    }

    #[tokio::test]
    async fn test_non_json_error_body_falls_back_to_status_line() {
        let api = FakeApi::new();
        api.respond_with(500, "<html>Internal Server Error</html>");
        let client = ApiClient::new("https://api.example.com", api);

        let err = client
            .call("/tenants", Method::GET, None)
            .await
            .expect_err("500");

        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[tokio::test]
    async fn test_non_string_error_field_is_ignored() {
        let api = FakeApi::new();
        api.respond_with(422, r#"{"error":{"code":7}}"#);
        let client = ApiClient::new("https://api.example.com", api);

        let err = client
            .call("/leases", Method::GET, None)
            .await
            .expect_err("422");

        assert_eq!(err.to_string(), "HTTP 422");
    }

    #[tokio::test]
    async fn test_unparseable_success_body_degrades_to_text() {
        let api = FakeApi::new();
        api.respond_with(200, "created, thanks");
        let client = ApiClient::new("https://api.example.com", api);

        let value = client
            .call("/tenants", Method::POST, Some(&json!({})))
            .await
            .expect("2xx");

        assert_eq!(value, Value::String("created, thanks".into()));
    }

    #[tokio::test]
    async fn test_empty_body_is_null() {
        let api = FakeApi::new();
        api.respond_with(204, "");
        let client = ApiClient::new("https://api.example.com", api);

        let value = client
            .call("/leases/x", Method::DELETE, None)
            .await
            .expect("2xx");

        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_body_is_sent_as_json_only_when_present() {
        let api = FakeApi::new();
        let client = ApiClient::new("https://api.example.com", api.clone());

        client.call("/tenants", Method::GET, None).await.expect("get");
        client
            .call("/tenants", Method::POST, Some(&json!({ "full_name": "Ann" })))
            .await
            .expect("post");

        let requests = api.requests.lock().unwrap();
        assert!(requests.iter().all(|r| r.content_type == "application/json"));
        assert_eq!(requests[0].body, None);
        assert_eq!(requests[1].body.as_deref(), Some(r#"{"full_name":"Ann"}"#));
    }

    #[test]
    fn test_decode_names_the_resource() {
        let err = decode::<Vec<String>>("/properties", json!({ "not": "a list" }))
            .expect_err("object is not a list");

        assert!(err.to_string().starts_with("unexpected response from /properties"));
    }
}
