use crate::models::lenient_text;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    #[default]
    Available,
    Rented,
    Maintenance,
}

impl PropertyStatus {
    pub const ALL: [Self; 3] = [Self::Available, Self::Rented, Self::Maintenance];

    /// The value sent over the wire and used in the status `<select>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Rented => "RENTED",
            Self::Maintenance => "MAINTENANCE",
        }
    }
    pub fn get_display_name(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Rented => "Rented",
            Self::Maintenance => "Maintenance",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub property_id: String,
    pub address: String,
    pub status: PropertyStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProperty {
    pub address: String,
    pub status: PropertyStatus,
    pub notes: String,
}

/// Body of `PUT /properties/:id`; fields left out keep their stored value.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyStatusUpdate {
    pub status: PropertyStatus,
}
