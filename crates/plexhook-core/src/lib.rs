//! Plexhook Core Library
//!
//! This crate provides the webhook event schema, error types, and configuration
//! shared by the storage, infrastructure, and API crates.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::PlexWebhook;
