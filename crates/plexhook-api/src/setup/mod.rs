//! Application setup and initialization
//!
//! Kept out of main.rs so tests can build the same router.

pub mod routes;
pub mod server;
pub mod storage;

use crate::constants::SERVICE_NAME;
use crate::state::AppState;
use anyhow::{Context, Result};
use plexhook_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config.validate().context("Configuration validation failed")?;

    plexhook_infra::init_telemetry(SERVICE_NAME, config.environment())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let storage = storage::setup_storage(&config).await?;
    let state = Arc::new(AppState::new(config, storage));

    let router = routes::setup_routes(&state.config, state.clone());

    Ok((state, router))
}
