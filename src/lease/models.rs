use crate::{property::models::Property, tenant::models::Tenant};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Lease {
    /// Older records may lack an id; those rows simply can't be deleted
    /// from the UI.
    #[serde(default)]
    pub lease_id: Option<String>,
    pub property_id: String,
    pub tenant_id: String,
    pub start_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewLease {
    pub property_id: String,
    pub tenant_id: String,
    pub start_date: String,
}

/// Linear search on purpose; these lists are a single unpaginated page.
pub fn property_label<'a>(properties: &'a [Property], id: &'a str) -> &'a str {
    properties
        .iter()
        .find(|p| p.property_id == id)
        .map(|p| p.address.as_str())
        .unwrap_or(id)
}

pub fn tenant_label<'a>(tenants: &'a [Tenant], id: &'a str) -> &'a str {
    tenants
        .iter()
        .find(|t| t.tenant_id == id)
        .map(|t| t.full_name.as_str())
        .unwrap_or(id)
}
