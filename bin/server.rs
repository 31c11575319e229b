// Receipt Processor - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use clap::Parser;
use receipt_processor::{init_logging, router, AppState, ReceiptStore, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = ServerConfig::parse();
    let state = AppState::new(ReceiptStore::new(), config.strict());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    tracing::info!(
        bind = %config.bind,
        strict = config.strict(),
        version = receipt_processor::VERSION,
        "receipt server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("receipt server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
