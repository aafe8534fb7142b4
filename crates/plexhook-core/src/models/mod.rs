//! Domain models

pub mod plex;

pub use plex::{Account, Credit, Metadata, Player, PlexWebhook, Server};
