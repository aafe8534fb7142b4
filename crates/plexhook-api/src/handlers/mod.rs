pub mod plex_webhook;

pub use plex_webhook::plex_webhook;
