//! Storage setup

use anyhow::{Context, Result};
use plexhook_core::Config;
use plexhook_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Create the local storage attachments are written to
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = LocalStorage::new(config.upload_dir().clone(), config.strict_filenames())
        .await
        .context("Failed to initialize local storage")?;

    tracing::info!(
        upload_dir = %storage.base_path().display(),
        strict_filenames = config.strict_filenames(),
        "Local storage initialized"
    );

    Ok(Arc::new(storage))
}
