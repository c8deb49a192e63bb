//! Flight status resolution
//!
//! Wraps the provider client and normalizes every outcome into a
//! `FlightStatus`. Resolution never fails at this level: provider misses
//! and transport failures become sentinel statuses, so a batch of
//! concurrent resolutions cannot be aborted by one bad lookup.

use crate::models::{
    Coordinates, FlightStatus, FlightStatusLabel, DEFAULT_ARR_COORDS, DEFAULT_DEP_COORDS,
};
use crate::services::airports;
use crate::services::aviationstack::{AviationstackClient, FlightEndpoint, FlightRecord};
use tracing::{info, warn};

/// Fallback airline display name when the provider omits one
const UNKNOWN_AIRLINE: &str = "Unknown airline";

/// Resolves flight codes to their last known status
pub struct StatusResolver {
    client: AviationstackClient,
}

impl StatusResolver {
    pub fn new(client: AviationstackClient) -> Self {
        Self { client }
    }

    /// Resolve a flight code to a well-formed `FlightStatus`.
    pub async fn resolve(&self, flight_code: &str) -> FlightStatus {
        match self.client.lookup_flight(flight_code).await {
            Ok(Some(record)) => {
                let status = normalize(record);
                info!(flight = %flight_code, status = %status.status, "resolved flight");
                status
            }
            Ok(None) => {
                info!(flight = %flight_code, "provider has no record");
                FlightStatus::not_found()
            }
            Err(err) => {
                warn!(flight = %flight_code, error = %err, "provider lookup failed");
                FlightStatus::provider_error()
            }
        }
    }
}

/// Normalize a raw provider record into the domain status.
fn normalize(record: FlightRecord) -> FlightStatus {
    let raw_status = record.flight_status.unwrap_or_else(|| "unknown".to_string());
    let status = FlightStatusLabel::from_raw(&raw_status);

    let departure = record.departure.unwrap_or_default();
    let arrival = record.arrival.unwrap_or_default();

    let delay_info = match arrival.delay {
        Some(minutes) if minutes > 0 => format!("delay: {minutes} minutes"),
        _ if status == FlightStatusLabel::Delayed => "delay reported".to_string(),
        _ => "on time".to_string(),
    };

    let dep_coords = leg_coordinates(&departure, DEFAULT_DEP_COORDS);
    let arr_coords = leg_coordinates(&arrival, DEFAULT_ARR_COORDS);

    let airline = record
        .airline
        .and_then(|a| a.name)
        .unwrap_or_else(|| UNKNOWN_AIRLINE.to_string());

    // Airport display names fall back to the bare IATA code
    let dep_name = departure.airport.or_else(|| departure.iata.clone());
    let arr_name = arrival.airport.or_else(|| arrival.iata.clone());

    FlightStatus {
        status,
        raw_status,
        dep_code: departure.iata,
        arr_code: arrival.iata,
        dep_name,
        arr_name,
        dep_coords,
        arr_coords,
        delay_info,
        airline: Some(airline),
        info: None,
    }
}

/// Coordinates for one leg: provider-supplied, else airport table, else the
/// fixed per-leg default.
fn leg_coordinates(endpoint: &FlightEndpoint, default: Coordinates) -> Coordinates {
    match (endpoint.latitude, endpoint.longitude) {
        (Some(lat), Some(lon)) => Coordinates { lat, lon },
        _ => endpoint
            .iata
            .as_deref()
            .and_then(airports::lookup)
            .unwrap_or(default),
    }
}
