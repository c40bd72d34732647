//! Leases link one tenant to one property from a start date. Only the ids
//! are stored on the lease; labels are looked up in the property and tenant
//! lists at render time.

pub mod api_ops;
pub mod components;
pub mod models;
