//! Storage abstraction trait
//!
//! This module defines the Storage trait that attachment backends implement.

use async_trait::async_trait;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Create failed: {0}")]
    CreateFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// The webhook handler writes attachments through this trait so the
/// filesystem can be swapped out in tests.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write a file from a stream/reader and return the number of bytes written
    ///
    /// The target is created or truncated before copying. A copy that fails
    /// partway leaves the partial file in place.
    ///
    /// # Arguments
    /// * `filename` - Storage key, normally the attachment's original filename
    /// * `content_length` - Declared size of the content, if known
    /// * `reader` - Async reader that provides the file content
    async fn upload_stream(
        &self,
        filename: &str,
        content_length: Option<u64>,
        reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<u64>;

    /// Read a stored file back
    async fn download(&self, filename: &str) -> StorageResult<Vec<u8>>;

    /// Check if a file exists
    async fn exists(&self, filename: &str) -> StorageResult<bool>;
}
