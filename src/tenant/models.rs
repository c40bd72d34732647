use crate::models::lenient_text;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Tenant {
    pub tenant_id: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTenant {
    pub full_name: String,
    pub phone: String,
    pub email: String,
}
