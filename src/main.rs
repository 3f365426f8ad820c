// Main entry point - dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::explorer_service::ExplorerService;
use crate::domain::selection::Selection;
use crate::infrastructure::cdf_writer::CdfWriter;
use crate::infrastructure::config::load_explorer_config;
use crate::infrastructure::vires_repository::ViresRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dashboard, download_artifact, health_check, options, refresh,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_explorer_config()?;

    // Create collaborators (infrastructure layer)
    let repository = Arc::new(ViresRepository::new(
        config.vires.host,
        config.vires.token,
    ));
    let encoder = Arc::new(CdfWriter::new());

    // Create the controller (application layer)
    let explorer = ExplorerService::new(repository, encoder);

    // First load: run one refresh with the default selection so the
    // dashboard is non-empty on startup. Failure leaves it empty rather
    // than aborting the service.
    let initial = Selection::default_window(chrono::Utc::now());
    if let Err(e) = explorer.refresh(initial).await {
        tracing::warn!("initial refresh failed, dashboard starts empty: {e}");
    }

    let state = Arc::new(AppState { explorer });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/options", get(options))
        .route("/dashboard", get(dashboard))
        .route("/refresh", post(refresh))
        .route("/download", get(download_artifact))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.listen.parse()?;
    tracing::info!("starting swarm-fac-explorer on {addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
