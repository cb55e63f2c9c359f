mod applications;
mod config;
mod errors;
mod extraction;
mod jobs;
mod models;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::applications::store::ApplicationStore;
use crate::config::Config;
use crate::extraction::upload::ensure_upload_dir;
use crate::extraction::PdfResumeExtractor;
use crate::jobs::store::JobStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every variable has a default)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hireboard API v{}", env!("CARGO_PKG_VERSION"));

    // Resume uploads land here before analysis; create the directory up
    // front so the first upload does not race its creation.
    ensure_upload_dir(&config.upload_dir)?;
    info!("Upload directory ready at {}", config.upload_dir.display());

    // Initialize the resume text extractor (PDF-backed by default)
    let extractor = Arc::new(PdfResumeExtractor);
    info!("Resume extractor initialized");

    // Build app state
    let state = AppState {
        config: config.clone(),
        jobs: JobStore::new(),
        applications: ApplicationStore::new(),
        extractor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
