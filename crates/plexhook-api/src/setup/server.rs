//! Server startup

use anyhow::{Context, Result};
use axum::Router;
use plexhook_core::Config;

/// Bind the listener and serve until the process is terminated
///
/// A bind failure is returned to the caller, which exits the process.
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.server_port());
    tracing::info!(addr = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        upload_dir = %config.upload_dir().display(),
        max_form_memory_mb = config.max_form_memory_bytes() / 1024 / 1024,
        "Server ready and accepting connections"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
