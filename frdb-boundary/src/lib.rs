//! Serializable, anemic data structures for accessing the
//! foodrescuedb API in a type-safe manner.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RescueLocation {
    pub id      : String,
    pub created : i64,
    pub name    : String,
    pub address : String,
    pub lat     : f64,
    pub lng     : f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Default))]
pub struct NewRescueLocation {
    pub name    : String,
    pub address : String,
    pub lat     : f64,
    pub lng     : f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Reverse geocoding result: the resolvable components plus the
/// assembled single-line address.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ResolvedAddress {
    pub formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct ResultCount {
    pub count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Version {
    pub version: String,
}

/// JSON body of an error response.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
