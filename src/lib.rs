//! flightscan - boarding-pass flight scanner backend
//!
//! Accepts a boarding-pass photo, OCRs it, extracts flight codes, resolves
//! each code against the aviationstack flight-status API, and keeps the
//! last known status per flight in an in-memory cache for polling clients.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::services::aviationstack::AviationstackClient;
use crate::services::extractor::FlightCodeExtractor;
use crate::services::ocr::OcrEngine;
use crate::services::resolver::StatusResolver;
use crate::services::watch_cache::WatchCache;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// OCR engine used by the scan endpoint
    pub ocr: Arc<dyn OcrEngine>,
    /// Flight status resolver over the aviationstack client
    pub resolver: Arc<StatusResolver>,
    /// Flight code extractor built from the configured allow-list
    pub extractor: Arc<FlightCodeExtractor>,
    /// Process-wide watch cache
    pub cache: WatchCache,
    /// Directory receiving uploaded images
    pub upload_dir: PathBuf,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Assemble application state from resolved configuration and an OCR
    /// engine (injected so tests can script recognition outcomes).
    pub fn new(config: &Config, ocr: Arc<dyn OcrEngine>) -> anyhow::Result<Self> {
        let client =
            AviationstackClient::new(config.provider_base_url.clone(), config.api_key.clone())?;
        let extractor = FlightCodeExtractor::new(&config.airline_prefixes)?;

        Ok(Self {
            ocr,
            resolver: Arc::new(StatusResolver::new(client)),
            extractor: Arc::new(extractor),
            cache: WatchCache::new(),
            upload_dir: config.upload_dir.clone(),
            startup_time: Utc::now(),
        })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::root::routes())
        .merge(api::scan::routes())
        .merge(api::updates::routes())
        .with_state(state)
        // The mobile frontend is served from a different origin
        .layer(CorsLayer::permissive())
}
