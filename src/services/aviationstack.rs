//! aviationstack API client
//!
//! Thin HTTP client over the aviationstack real-time flights endpoint.
//! Returns the raw provider record; normalization into the domain model is
//! the resolver's job.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("flightscan/", env!("CARGO_PKG_VERSION"));

/// Provider client errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Top-level provider response
#[derive(Debug, Clone, Deserialize)]
pub struct FlightsResponse {
    pub data: Option<Vec<FlightRecord>>,
}

/// One flight record as reported by the provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightRecord {
    pub flight_status: Option<String>,
    pub departure: Option<FlightEndpoint>,
    pub arrival: Option<FlightEndpoint>,
    pub airline: Option<AirlineInfo>,
}

/// Departure or arrival leg details
///
/// The free tier frequently omits airport names and coordinates; every
/// field is optional and the resolver fills the gaps.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightEndpoint {
    pub iata: Option<String>,
    pub airport: Option<String>,
    /// Delay in minutes, when reported
    pub delay: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Operating airline details
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirlineInfo {
    pub name: Option<String>,
}

/// aviationstack API client
pub struct AviationstackClient {
    http_client: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl AviationstackClient {
    pub fn new(base_url: String, access_key: String) -> Result<Self, ProviderError> {
        // No request timeout: an unresponsive provider stalls only the
        // request that hit it; imposing a deadline is left to the caller's
        // infrastructure.
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
            access_key,
        })
    }

    /// Look up the most recent record for a flight IATA code.
    ///
    /// Returns `Ok(None)` when the provider has no matching record, which is
    /// a normal outcome, not an error.
    pub async fn lookup_flight(
        &self,
        flight_iata: &str,
    ) -> Result<Option<FlightRecord>, ProviderError> {
        debug!(flight = %flight_iata, url = %self.base_url, "querying aviationstack");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("flight_iata", flight_iata),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(status.as_u16(), body));
        }

        let payload: FlightsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(payload.data.unwrap_or_default().into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_typical_provider_payload() {
        let json = r#"{
            "data": [{
                "flight_status": "landed",
                "departure": {"iata": "CDG", "airport": "Charles de Gaulle", "delay": 12},
                "arrival": {"iata": "JFK", "airport": null, "delay": null},
                "airline": {"name": "Air France"}
            }]
        }"#;

        let payload: FlightsResponse = serde_json::from_str(json).unwrap();
        let record = payload.data.unwrap().into_iter().next().unwrap();
        assert_eq!(record.flight_status.as_deref(), Some("landed"));

        let departure = record.departure.unwrap();
        assert_eq!(departure.iata.as_deref(), Some("CDG"));
        assert_eq!(departure.delay, Some(12));

        let arrival = record.arrival.unwrap();
        assert!(arrival.airport.is_none());
        assert_eq!(record.airline.unwrap().name.as_deref(), Some("Air France"));
    }

    #[test]
    fn deserializes_an_empty_result_set() {
        let payload: FlightsResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(payload.data.unwrap().is_empty());

        let payload: FlightsResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(payload.data.is_none());
    }

    #[tokio::test]
    async fn transport_failure_is_a_network_error() {
        // Nothing listens on this port
        let client = AviationstackClient::new(
            "http://127.0.0.1:9/v1/flights".to_string(),
            "test-key".to_string(),
        )
        .unwrap();

        let result = client.lookup_flight("AF1234").await;
        assert!(matches!(result, Err(ProviderError::Network(_))));
    }
}
