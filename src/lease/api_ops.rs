use super::models::{Lease, NewLease};
use crate::{
    api_client::{ApiClient, ClientError},
    property::{api_ops::list_properties, models::Property},
    tenant::{api_ops::list_tenants, models::Tenant},
};
use axum::http::Method;
use serde_json::to_value;

pub async fn list_leases(client: &ApiClient) -> Result<Vec<Lease>, ClientError> {
    client.get("/leases").await
}

/// Everything the leases tab needs. The three lists are fetched one after
/// another, never concurrently.
pub struct LeaseListing {
    pub leases: Vec<Lease>,
    pub properties: Vec<Property>,
    pub tenants: Vec<Tenant>,
}

pub async fn get_lease_listing(client: &ApiClient) -> Result<LeaseListing, ClientError> {
    let leases = list_leases(client).await?;
    let properties = list_properties(client).await?;
    let tenants = list_tenants(client).await?;

    Ok(LeaseListing {
        leases,
        properties,
        tenants,
    })
}

pub async fn create_lease(client: &ApiClient, lease: &NewLease) -> Result<(), ClientError> {
    let body = to_value(lease).map_err(|e| ClientError::UnexpectedShape {
        resource: "lease form".into(),
        detail: e.to_string(),
    })?;
    client.call("/leases", Method::POST, Some(&body)).await?;

    Ok(())
}

pub async fn delete_lease(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    let path = format!("/leases/{}", urlencoding::encode(id));
    client.call(&path, Method::DELETE, None).await?;

    Ok(())
}
