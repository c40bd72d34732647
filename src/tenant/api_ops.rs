use super::models::{NewTenant, Tenant};
use crate::api_client::{ApiClient, ClientError};
use axum::http::Method;
use serde_json::to_value;

pub async fn list_tenants(client: &ApiClient) -> Result<Vec<Tenant>, ClientError> {
    client.get("/tenants").await
}

pub async fn create_tenant(client: &ApiClient, tenant: &NewTenant) -> Result<(), ClientError> {
    let body = to_value(tenant).map_err(|e| ClientError::UnexpectedShape {
        resource: "tenant form".into(),
        detail: e.to_string(),
    })?;
    client.call("/tenants", Method::POST, Some(&body)).await?;

    Ok(())
}

pub async fn delete_tenant(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    let path = format!("/tenants/{}", urlencoding::encode(id));
    client.call(&path, Method::DELETE, None).await?;

    Ok(())
}
