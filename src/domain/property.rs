use std::fmt::Display;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::types::PropertyId;

/// Lifecycle status of a listing.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyStatus {
    #[default]
    #[serde(rename = "For Sale")]
    ForSale,
    Pending,
    Sold,
}

impl PropertyStatus {
    /// Returns the label used on the wire and in filter comparisons.
    pub const fn as_str(self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Sold => "Sold",
        }
    }
}

impl Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A real-estate listing.
///
/// `price`, `bathrooms` and `lot_size` are exact decimals so currency and
/// acreage never ride on floating point. `is_active` controls visibility in
/// listing queries only; inactive records stay reachable by direct id lookup.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Free-form category, e.g. "house", "condo", "townhouse".
    pub property_type: String,
    pub status: PropertyStatus,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<Decimal>,
    pub square_footage: Option<u32>,
    /// Lot size in acres.
    pub lot_size: Option<Decimal>,
    pub year_built: Option<i32>,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Property`].
///
/// Optional fields left as `None` receive their defaults when the repository
/// creates the record: status `For Sale`, `is_active` true.
#[derive(Clone, Debug, Deserialize)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub property_type: String,
    pub status: Option<PropertyStatus>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<Decimal>,
    pub square_footage: Option<u32>,
    pub lot_size: Option<Decimal>,
    pub year_built: Option<i32>,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub features: Vec<String>,
    pub is_active: Option<bool>,
}

/// Partial update applied over an existing [`Property`].
///
/// Only populated fields change; absent fields keep their current value.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateProperty {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub property_type: Option<String>,
    pub status: Option<PropertyStatus>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<Decimal>,
    pub square_footage: Option<u32>,
    pub lot_size: Option<Decimal>,
    pub year_built: Option<i32>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}
