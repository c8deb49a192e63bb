//! Flight status domain types
//!
//! Everything the scan and poll endpoints return is built from these types.
//! Field names serialize in camelCase to match the wire format consumed by
//! the mobile frontend.

use chrono::{DateTime, Utc};
use serde::ser::Serializer;
use serde::Serialize;
use std::fmt;

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Departure-leg fallback when neither the provider nor the airport table
/// supplies coordinates (central Paris).
pub const DEFAULT_DEP_COORDS: Coordinates = Coordinates {
    lat: 48.8566,
    lon: 2.3522,
};

/// Arrival-leg fallback, deliberately distinct from the departure default
/// (New York City).
pub const DEFAULT_ARR_COORDS: Coordinates = Coordinates {
    lat: 40.7128,
    lon: -74.0060,
};

/// Normalized status label for a flight
///
/// The provider's raw vocabulary maps onto the named variants; any raw value
/// outside that vocabulary is carried through unchanged in `Other`, so new
/// provider statuses surface to clients without a code change here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightStatusLabel {
    Scheduled,
    Active,
    Landed,
    Cancelled,
    Incident,
    Diverted,
    Delayed,
    /// Provider had no record for the flight
    NotFound,
    /// Provider could not be reached or returned garbage
    Error,
    /// Unmapped raw provider status, passed through as-is
    Other(String),
}

impl FlightStatusLabel {
    /// Map the provider's raw status vocabulary onto a label.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "scheduled" => Self::Scheduled,
            "active" => Self::Active,
            "landed" => Self::Landed,
            "cancelled" => Self::Cancelled,
            "incident" => Self::Incident,
            "diverted" => Self::Diverted,
            "delayed" => Self::Delayed,
            other => Self::Other(other.to_string()),
        }
    }

    /// Display label shown to clients.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Active => "In flight",
            Self::Landed => "Landed",
            Self::Cancelled => "Cancelled",
            Self::Incident => "Incident",
            Self::Diverted => "Diverted",
            Self::Delayed => "Delayed",
            Self::NotFound => "Not found",
            Self::Error => "Error",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for FlightStatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FlightStatusLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Last known status of a flight, normalized from the provider response
///
/// Departure and arrival coordinates are always present: the resolver fills
/// them from the provider, the airport table, or the fixed per-leg defaults,
/// in that order. Optional fields are omitted from JSON when absent, which
/// keeps the NotFound/Error sentinel payloads minimal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightStatus {
    pub status: FlightStatusLabel,
    pub raw_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arr_name: Option<String>,
    pub dep_coords: Coordinates,
    pub arr_coords: Coordinates,
    pub delay_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    /// Human-readable explanation, set only for NotFound/Error sentinels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl FlightStatus {
    /// Sentinel for a flight the provider has no record of.
    pub fn not_found() -> Self {
        Self::sentinel(FlightStatusLabel::NotFound, "unknown", "no recent info")
    }

    /// Sentinel for a failed provider lookup (network error, bad payload).
    pub fn provider_error() -> Self {
        Self::sentinel(FlightStatusLabel::Error, "error", "could not reach API")
    }

    fn sentinel(status: FlightStatusLabel, raw_status: &str, info: &str) -> Self {
        Self {
            status,
            raw_status: raw_status.to_string(),
            dep_code: None,
            arr_code: None,
            dep_name: None,
            arr_name: None,
            dep_coords: DEFAULT_DEP_COORDS,
            arr_coords: DEFAULT_ARR_COORDS,
            delay_info: "on time".to_string(),
            airline: None,
            info: Some(info.to_string()),
        }
    }
}

/// A cached flight status plus the moment it was written
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEntry {
    #[serde(flatten)]
    pub status: FlightStatus,
    pub last_update: DateTime<Utc>,
}
