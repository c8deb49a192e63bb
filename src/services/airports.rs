//! Static airport coordinate table
//!
//! Approximate coordinates for a handful of well-known airports, used as a
//! fallback when the provider response carries no coordinates. Codes outside
//! the table return `None`; the resolver supplies per-leg defaults.

use crate::models::Coordinates;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static AIRPORT_COORDS: Lazy<HashMap<&'static str, Coordinates>> = Lazy::new(|| {
    HashMap::from([
        ("CDG", Coordinates { lat: 49.0097, lon: 2.5479 }),    // Paris Charles de Gaulle
        ("ORY", Coordinates { lat: 48.7262, lon: 2.3652 }),    // Paris Orly
        ("JFK", Coordinates { lat: 40.6413, lon: -73.7781 }),  // New York JFK
        ("LHR", Coordinates { lat: 51.4700, lon: -0.4543 }),   // London Heathrow
        ("DXB", Coordinates { lat: 25.2532, lon: 55.3657 }),   // Dubai
        ("AMS", Coordinates { lat: 52.3105, lon: 4.7683 }),    // Amsterdam
        ("LAX", Coordinates { lat: 33.9416, lon: -118.4085 }), // Los Angeles
        ("HND", Coordinates { lat: 35.5494, lon: 139.7798 }),  // Tokyo Haneda
        ("SIN", Coordinates { lat: 1.3644, lon: 103.9915 }),   // Singapore
        ("FRA", Coordinates { lat: 50.0379, lon: 8.5622 }),    // Frankfurt
        ("NCE", Coordinates { lat: 43.6584, lon: 7.2158 }),    // Nice
        ("BOD", Coordinates { lat: 44.8283, lon: -0.7155 }),   // Bordeaux
        ("TLS", Coordinates { lat: 43.6291, lon: 1.3638 }),    // Toulouse
        ("LYS", Coordinates { lat: 45.7255, lon: 5.0811 }),    // Lyon
        ("MRS", Coordinates { lat: 43.4367, lon: 5.2150 }),    // Marseille
    ])
});

/// Look up approximate coordinates for an uppercase IATA airport code.
pub fn lookup(iata: &str) -> Option<Coordinates> {
    AIRPORT_COORDS.get(iata).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_airport_resolves() {
        let cdg = lookup("CDG").unwrap();
        assert_eq!(cdg.lat, 49.0097);
        assert_eq!(cdg.lon, 2.5479);
    }

    #[test]
    fn unknown_airport_is_absent() {
        assert!(lookup("XYZ").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive_uppercase() {
        // Provider IATA codes are uppercase; the table only answers for those
        assert!(lookup("cdg").is_none());
    }
}
