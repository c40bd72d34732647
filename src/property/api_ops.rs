use super::models::{NewProperty, Property, PropertyStatusUpdate};
use crate::api_client::{ApiClient, ClientError};
use axum::http::Method;
use serde_json::to_value;

pub async fn list_properties(client: &ApiClient) -> Result<Vec<Property>, ClientError> {
    client.get("/properties").await
}

/// Whatever the server answers with is ignored; callers re-fetch the list.
pub async fn create_property(
    client: &ApiClient,
    property: &NewProperty,
) -> Result<(), ClientError> {
    let body = to_value(property).map_err(|e| ClientError::UnexpectedShape {
        resource: "property form".into(),
        detail: e.to_string(),
    })?;
    client.call("/properties", Method::POST, Some(&body)).await?;

    Ok(())
}

pub async fn update_property_status(
    client: &ApiClient,
    id: &str,
    update: &PropertyStatusUpdate,
) -> Result<(), ClientError> {
    let body = to_value(update).map_err(|e| ClientError::UnexpectedShape {
        resource: "status update".into(),
        detail: e.to_string(),
    })?;
    let path = format!("/properties/{}", urlencoding::encode(id));
    client.call(&path, Method::PUT, Some(&body)).await?;

    Ok(())
}

pub async fn delete_property(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    let path = format!("/properties/{}", urlencoding::encode(id));
    client.call(&path, Method::DELETE, None).await?;

    Ok(())
}
