//! flightscan - boarding-pass flight scanner backend service

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use flightscan::config::Config;
use flightscan::services::ocr::TesseractOcr;
use flightscan::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting flightscan v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = Config::load()?;

    // Uploaded images land here; created up front so the first scan does
    // not race directory creation
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    info!("Upload directory: {}", config.upload_dir.display());

    let ocr = Arc::new(TesseractOcr::new(&config.ocr_language));
    let state = AppState::new(&config, ocr)?;
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("flightscan listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
