//! Local HTTP surface for the dashboard.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::dashboard::Dashboard;

pub mod routes;

pub use routes::build_router;

/// Serve the dashboard on `addr` until Ctrl-C.
pub async fn serve(dashboard: Arc<Dashboard>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    let local = listener.local_addr()?;
    log::info!("Dashboard running on http://{local}/");

    axum::serve(listener, build_router(dashboard))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    log::info!("Dashboard shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
