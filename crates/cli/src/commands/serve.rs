use anyhow::Result;
use frn_console_core::ConsoleConfig;
use frn_console_http::{AppState, create_router};
use std::sync::Arc;

use crate::load_catalog;

pub(crate) async fn run(port: u16, host: String, config: ConsoleConfig) -> Result<()> {
    let catalog = load_catalog(&config)?;
    tracing::info!(
        endpoints = catalog.len(),
        latency_ms = config.latency.as_millis(),
        max_sessions = config.max_sessions,
        "catalog loaded"
    );

    let state = Arc::new(AppState::new(catalog, &config));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
