//! Rentable units. A property has an address, an occupancy status and
//! free-form notes.

pub mod api_ops;
pub mod components;
pub mod models;
