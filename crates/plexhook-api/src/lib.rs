//! Plexhook API Library
//!
//! This crate provides the webhook handler, multipart form parsing, and
//! application setup for the Plex webhook receiver.

pub mod constants;
pub mod error;
mod handlers;
pub mod setup;
pub mod state;
pub mod utils;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;
