//! Tracing initialization
//!
//! Installs the global `tracing` subscriber: an `EnvFilter` driven by
//! `RUST_LOG` and a human-readable fmt layer.

mod init_basic;

pub use init_basic::{init_telemetry, TelemetryError};
