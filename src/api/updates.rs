//! Watch-cache polling endpoint

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::models::WatchEntry;
use crate::AppState;

/// Query parameters for GET /check-updates
#[derive(Debug, Deserialize)]
pub struct UpdatesQuery {
    /// Comma-separated flight codes; absent or empty means "nothing to check"
    pub flights: Option<String>,
}

/// Poll response payload
#[derive(Debug, Serialize)]
pub struct UpdatesResponse {
    pub success: bool,
    pub updates: Vec<FlightUpdate>,
}

/// One cached flight in a poll response
#[derive(Debug, Serialize)]
pub struct FlightUpdate {
    pub flight: String,
    #[serde(flatten)]
    pub entry: WatchEntry,
}

/// GET /check-updates?flights=AF1234,U2567
///
/// Returns the cached entries for the requested codes. Codes never seen by
/// a scan are silently omitted; an absent or empty `flights` parameter
/// yields an empty list, not an error.
pub async fn check_updates(
    State(state): State<AppState>,
    Query(query): Query<UpdatesQuery>,
) -> Json<UpdatesResponse> {
    let codes: Vec<String> = query
        .flights
        .unwrap_or_default()
        .split(',')
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .collect();

    let updates = state
        .cache
        .get_many(&codes)
        .await
        .into_iter()
        .map(|(flight, entry)| FlightUpdate { flight, entry })
        .collect();

    Json(UpdatesResponse {
        success: true,
        updates,
    })
}

/// Build poll routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/check-updates", get(check_updates))
}
