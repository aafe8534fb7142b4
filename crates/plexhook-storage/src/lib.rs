//! Plexhook Storage Library
//!
//! This crate persists webhook attachments. It includes the Storage trait and
//! the local filesystem implementation.
//!
//! # Storage key format
//!
//! The storage key is the attachment's original filename, joined onto the
//! storage root. By default the name is trusted verbatim (same-named uploads
//! overwrite each other, and names with directory components are honoured).
//! Strict mode rejects keys containing `..`, a leading `/`, or resolving
//! outside the root.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
