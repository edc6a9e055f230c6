//! Learnboard - learning platform profile dashboard
//!
//! Main entry point for the local web server.

use std::sync::Arc;

use anyhow::Context;
use learnboard_infra::config;
use learnboard_lib::utils::logging::{init_tracing, log_startup_failure};
use learnboard_lib::{router, AppContext};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the subscriber reads RUST_LOG
    let dotenv = dotenvy::dotenv();

    init_tracing().map_err(|err| anyhow::anyhow!(err))?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) => warn!(error = %err, "Could not load .env file"),
    }

    info!("Learnboard starting...");

    let config = config::load()
        .map_err(|err| log_startup_failure("configuration", err))
        .context("failed to load configuration")?;
    let bind_addr = config.server.bind_addr.clone();

    let ctx = AppContext::start(config)
        .await
        .map_err(|err| log_startup_failure("context", err))
        .context("failed to start application context")?;
    let ctx = Arc::new(ctx);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %bind_addr, "Learnboard listening on http://{bind_addr}");

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Learnboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
