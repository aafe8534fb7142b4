//! Plex Media Server webhook payload.
//!
//! Mirrors the JSON document Plex posts in the `payload` form field
//! (<https://support.plex.tv/articles/115002267687-webhooks/>). Every field is
//! defaulted so partial payloads decode; only the event name and the three
//! title fields are read by the receiver.

use serde::{Deserialize, Serialize};

/// Complete webhook payload sent by Plex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlexWebhook {
    pub event: String,
    pub user: bool,
    pub owner: bool,
    #[serde(rename = "Account")]
    pub account: Account,
    #[serde(rename = "Server")]
    pub server: Server,
    #[serde(rename = "Player")]
    pub player: Player,
    #[serde(rename = "Metadata")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: i64,
    pub thumb: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub title: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    pub local: bool,
    pub public_address: String,
    pub title: String,
    pub uuid: String,
}

/// Library item the event refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub library_section_type: String,
    pub rating_key: String,
    pub key: String,
    pub parent_rating_key: String,
    pub grandparent_rating_key: String,
    pub guid: String,
    pub parent_guid: String,
    pub grandparent_guid: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub grandparent_title: String,
    pub parent_title: String,
    pub content_rating: String,
    pub summary: String,
    pub index: i64,
    pub parent_index: i64,
    pub rating: f64,
    pub year: i64,
    pub thumb: String,
    pub art: String,
    pub parent_thumb: String,
    pub grandparent_thumb: String,
    pub grandparent_art: String,
    pub grandparent_theme: String,
    pub originally_available_at: String,
    pub added_at: i64,
    pub updated_at: i64,
    pub chapter_source: String,
    #[serde(rename = "Director")]
    pub directors: Vec<Credit>,
    #[serde(rename = "Writer")]
    pub writers: Vec<Credit>,
}

/// Director or writer credit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credit {
    pub id: i64,
    pub tag: String,
}

impl PlexWebhook {
    /// Decode a raw payload without ever failing.
    ///
    /// Any decode error yields the zero-valued payload; the error is handed
    /// back so the caller can log it.
    pub fn parse_lenient(raw: &str) -> (Self, Option<serde_json::Error>) {
        match serde_json::from_str::<PlexWebhook>(raw) {
            Ok(webhook) => (webhook, None),
            Err(e) => (PlexWebhook::default(), Some(e)),
        }
    }

    /// Grandparent title, parent title, and title of the item.
    pub fn titles(&self) -> (&str, &str, &str) {
        (
            &self.metadata.grandparent_title,
            &self.metadata.parent_title,
            &self.metadata.title,
        )
    }
}
