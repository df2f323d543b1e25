//! Gageboek API Server
//!
//! Main entry point for the Gageboek backend service.

use std::sync::Arc;

use axum::http::HeaderName;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gageboek_api::{AppState, create_router};
use gageboek_core::vat::VatRates;
use gageboek_shared::AppConfig;
use gageboek_store::BlobGageRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gageboek=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Create the entry repository over the configured storage provider
    let repository = BlobGageRepository::from_provider(&config.storage, VatRates::dutch())?;
    info!(
        provider = config.storage.name(),
        bucket = config.storage.bucket(),
        "Storage configured"
    );

    // Header carrying the upstream-resolved principal id
    let principal_header = HeaderName::from_bytes(config.auth.principal_header.as_bytes())?;

    // Create application state
    let state = AppState {
        repository: Arc::new(repository),
        principal_header,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
