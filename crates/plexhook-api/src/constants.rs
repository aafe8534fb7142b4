//! Route and form constants

/// Path Plex is configured to deliver webhooks to
pub const WEBHOOK_PATH: &str = "/plex";

/// Form field carrying the JSON event description
pub const PAYLOAD_FIELD: &str = "payload";

/// Form file part carrying the thumbnail
pub const THUMB_FIELD: &str = "thumb";

/// Response body after the thumbnail is written
pub const SUCCESS_BODY: &str = "Successfully Uploaded File\n";

pub const SERVICE_NAME: &str = "plexhook";
