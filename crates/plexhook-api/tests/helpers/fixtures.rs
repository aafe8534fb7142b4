//! Test fixtures: webhook payloads, thumbnails, and multipart forms.

use axum_test::multipart::{MultipartForm, Part};

/// Payload of a `media.play` event for an episode.
pub fn play_payload() -> String {
    serde_json::json!({
        "event": "media.play",
        "Metadata": {
            "title": "Ep1",
            "parentTitle": "S1",
            "grandparentTitle": "Show"
        }
    })
    .to_string()
}

/// Fake JPEG thumbnail of exactly `len` bytes.
pub fn thumbnail(len: usize) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
    data.extend((0..len.saturating_sub(4)).map(|i| (i % 251) as u8));
    data.truncate(len);
    data
}

/// Webhook form with a `payload` field and a `thumb` file part.
pub fn webhook_form(payload: &str, filename: &str, thumb: Vec<u8>) -> MultipartForm {
    MultipartForm::new()
        .add_text("payload", payload.to_string())
        .add_part(
            "thumb",
            Part::bytes(thumb).file_name(filename).mime_type("image/jpeg"),
        )
}
