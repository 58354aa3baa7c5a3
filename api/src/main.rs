//! RetailX API Server
//!
//! Loads the datasets once and serves the chat and form endpoints.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use retailx_api::adapters::verify_export;
use retailx_api::app::{AssistantService, Session};
use retailx_api::config::Config;
use retailx_api::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,retailx_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RetailX API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        front_end = %config.front_end,
        "Loading datasets..."
    );

    let session = Session::open(&config).context("failed to open session")?;
    for entry in &session.data.report {
        tracing::info!(dataset = %entry.dataset, status = %entry.status, "Dataset status");
    }

    if config.export_on_load {
        match verify_export(&config.export_path) {
            Ok(summary) => tracing::info!(counts = ?summary.counts, "Export verified"),
            Err(e) => tracing::warn!(error = %e, "Export verification failed"),
        }
    } else {
        tracing::debug!(
            path = %config.export_path.display(),
            "Export on load disabled; GET /export serves the document"
        );
    }

    let assistant = AssistantService::from_config(session.store, &config);
    let state = AppState::new(assistant, session.data);
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
