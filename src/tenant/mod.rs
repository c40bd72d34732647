//! People who may occupy a property.

pub mod api_ops;
pub mod components;
pub mod models;
