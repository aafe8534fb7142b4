use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;
use tokio::io::{AsyncRead, AsyncWriteExt};

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
    strict_filenames: bool,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Directory attachments are written into (e.g., ".")
    /// * `strict_filenames` - Reject filenames that would escape `base_path`
    pub async fn new(base_path: impl Into<PathBuf>, strict_filenames: bool) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            strict_filenames,
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Convert a filename to its filesystem path
    ///
    /// Outside strict mode the filename is joined verbatim, so absolute names
    /// and `..` components are honoured.
    fn key_to_path(&self, filename: &str) -> StorageResult<PathBuf> {
        let path = self.base_path.join(filename);
        if !self.strict_filenames {
            return Ok(path);
        }

        if filename.is_empty()
            || filename.contains("..")
            || filename.starts_with('/')
            || Path::new(filename).is_absolute()
        {
            return Err(StorageError::InvalidKey(format!(
                "Filename {:?} is not allowed",
                filename
            )));
        }

        let base_canonical = self.base_path.canonicalize().map_err(|e| {
            StorageError::ConfigError(format!("Failed to canonicalize base path: {}", e))
        })?;

        // An existing file may be a symlink; otherwise its parent must stay inside the base.
        let resolved = path
            .canonicalize()
            .or_else(|_| path.parent().unwrap_or(self.base_path.as_path()).canonicalize());
        if let Ok(canonical) = resolved {
            if canonical.strip_prefix(&base_canonical).is_err() {
                return Err(StorageError::InvalidKey(format!(
                    "Filename {:?} resolves outside storage directory",
                    filename
                )));
            }
        }

        Ok(path)
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload_stream(
        &self,
        filename: &str,
        content_length: Option<u64>,
        mut reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<u64> {
        let path = self.key_to_path(filename)?;
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::CreateFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        let bytes_copied = tokio::io::copy(&mut reader, &mut file).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to write stream to file {}: {}",
                path.display(),
                e
            ))
        })?;

        file.flush().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to flush file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        if let Some(expected) = content_length {
            if expected != bytes_copied {
                tracing::warn!(
                    path = %path.display(),
                    expected_bytes = expected,
                    size_bytes = bytes_copied,
                    "Written size differs from declared size"
                );
            }
        }

        tracing::info!(
            path = %path.display(),
            key = %filename,
            size_bytes = bytes_copied,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage stream upload successful"
        );

        Ok(bytes_copied)
    }

    async fn download(&self, filename: &str) -> StorageResult<Vec<u8>> {
        let path = self.key_to_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(filename.to_string()));
        }

        fs::read(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })
    }

    async fn exists(&self, filename: &str) -> StorageResult<bool> {
        let path = self.key_to_path(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }
}
