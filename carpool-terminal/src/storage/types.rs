//! On-disk document types.
//!
//! These mirror the JSON layout field for field. Values are plain strings;
//! validation happens when converting to domain types.

use serde::{Deserialize, Serialize};

/// The whole data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBookDto {
    #[serde(default)]
    pub passengers: Vec<PassengerDto>,

    #[serde(default)]
    pub pools: Vec<PoolDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDto {
    pub name: String,
    pub phone: String,
    pub address: String,

    /// Upper-case weekday name, e.g. "MONDAY".
    pub trip_day: String,

    /// Four digits, "HHMM".
    pub trip_time: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Omitted when no driver is assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<DriverDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDto {
    pub name: String,
    pub phone: String,
}

/// A pool with full copies of its passengers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolDto {
    pub driver: DriverDto,
    pub trip_day: String,
    pub trip_time: String,
    pub passengers: Vec<PassengerDto>,

    #[serde(default)]
    pub tags: Vec<String>,
}
