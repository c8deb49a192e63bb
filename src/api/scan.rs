//! Boarding-pass scan endpoint
//!
//! One uploaded image in, a list of resolved flight statuses out. The
//! pipeline: store the image, OCR it, extract flight codes, resolve every
//! unique code concurrently, record each result in the watch cache.

use axum::extract::{Multipart, State};
use axum::{routing::post, Json, Router};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::FlightStatus;
use crate::AppState;

/// Scan response payload
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub success: bool,
    pub flights: Vec<ScannedFlight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One resolved flight in a scan response
#[derive(Debug, Serialize)]
pub struct ScannedFlight {
    pub flight: String,
    #[serde(flatten)]
    pub status: FlightStatus,
}

/// POST /scan-flight
///
/// Accepts a multipart form with one image file (field name arbitrary).
///
/// **Responses:**
/// - 200 `{success: true, flights: [...]}` with one entry per unique code
/// - 200 `{success: true, flights: [], message}` when nothing was detected
/// - 400 `{error}` when the form carries no file
/// - 500 `{error}` when OCR or the upload handling fails unexpectedly
pub async fn scan_flight(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ScanResponse>> {
    // First field carrying a file is the image; everything else is ignored
    let mut image_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart request: {e}")))?
    {
        if field.file_name().is_some() {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("failed to read uploaded file: {e}")))?;
            image_bytes = Some(bytes);
            break;
        }
    }
    let Some(image_bytes) = image_bytes else {
        return Err(ApiError::BadRequest("no image file supplied".to_string()));
    };

    let image_path = state
        .upload_dir
        .join(format!("upload-{}.img", Uuid::new_v4()));
    tokio::fs::write(&image_path, &image_bytes).await?;
    info!(
        path = %image_path.display(),
        bytes = image_bytes.len(),
        "stored uploaded image"
    );

    let ocr_result = state.ocr.recognize(&image_path).await;

    // The uploaded file is scoped to this request: remove it whether or not
    // recognition succeeded.
    if let Err(err) = tokio::fs::remove_file(&image_path).await {
        warn!(path = %image_path.display(), error = %err, "failed to remove uploaded image");
    }

    let text = ocr_result.map_err(|e| ApiError::Internal(format!("OCR failed: {e}")))?;

    let codes = state.extractor.extract(&text);
    if codes.is_empty() {
        info!("no flight codes detected in scan");
        return Ok(Json(ScanResponse {
            success: true,
            flights: Vec::new(),
            message: Some("no flight numbers detected".to_string()),
        }));
    }

    info!(count = codes.len(), "resolving extracted flight codes");

    // Fan out one resolution per unique code and join them all; failed
    // lookups come back as sentinel statuses, so the join itself cannot fail
    let lookups = codes.into_iter().map(|code| {
        let resolver = state.resolver.clone();
        async move {
            let status = resolver.resolve(&code).await;
            (code, status)
        }
    });
    let resolved = futures::future::join_all(lookups).await;

    let mut flights = Vec::with_capacity(resolved.len());
    for (code, status) in resolved {
        state.cache.put(&code, status.clone()).await;
        flights.push(ScannedFlight {
            flight: code,
            status,
        });
    }

    Ok(Json(ScanResponse {
        success: true,
        flights,
        message: None,
    }))
}

/// Build scan routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/scan-flight", post(scan_flight))
}
