use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use plexhook_core::{AppError, PlexWebhook};
use plexhook_infra::get_request_id;

use crate::constants::{PAYLOAD_FIELD, SUCCESS_BODY, THUMB_FIELD};
use crate::error::{log_error, HttpAppError};
use crate::state::AppState;
use crate::utils::multipart::{parse_multipart_form, ParsedForm};

/// Plex webhook handler
///
/// Logs the delivery's headers and event, then writes the `thumb` attachment
/// into the upload directory under its original filename.
///
/// Responses:
/// - 200 `Successfully Uploaded File` once the thumbnail is on disk
/// - 500 with the raw error text if the file cannot be created or written
/// - empty 200 for non-POST requests and deliveries without a `thumb` part
///
/// A malformed payload or an oversized form never fails the request; the
/// decoded event is simply empty.
#[tracing::instrument(
    skip(state, request),
    fields(
        method = %request.method(),
        request_id = %get_request_id(&request).unwrap_or_default(),
        operation = "plex_webhook"
    )
)]
pub async fn plex_webhook(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Response, HttpAppError> {
    if request.method() != Method::POST {
        return Ok(StatusCode::OK.into_response());
    }

    log_headers(request.headers());

    let mut form = read_form(request, state.config.max_form_memory_bytes()).await;

    let payload = form.value(PAYLOAD_FIELD).unwrap_or_default();
    tracing::info!(payload = %payload, "Webhook payload received");

    let (webhook, decode_error) = PlexWebhook::parse_lenient(payload);
    if let Some(e) = decode_error {
        log_error(&AppError::from(e));
    }
    let (grandparent_title, parent_title, title) = webhook.titles();
    tracing::info!(
        event = %webhook.event,
        grandparent_title = %grandparent_title,
        parent_title = %parent_title,
        title = %title,
        "Webhook event decoded"
    );

    let thumb = form.take_file(THUMB_FIELD)?;
    tracing::info!(
        filename = %thumb.filename,
        size_bytes = thumb.size(),
        content_type = ?thumb.content_type,
        mime_headers = ?thumb.headers,
        "Uploaded file"
    );

    let size = thumb.size();
    let reader = Box::pin(Cursor::new(thumb.data));
    state
        .storage
        .upload_stream(&thumb.filename, Some(size), reader)
        .await?;

    Ok((StatusCode::OK, SUCCESS_BODY).into_response())
}

fn log_headers(headers: &HeaderMap) {
    for (name, value) in headers {
        tracing::info!(
            key = %name,
            value = %String::from_utf8_lossy(value.as_bytes()),
            "Request header"
        );
    }
}

/// Parse the body as a multipart form, falling back to whatever was read
async fn read_form(request: Request, max_memory: usize) -> ParsedForm {
    let multipart = match Multipart::from_request(request, &()).await {
        Ok(multipart) => multipart,
        Err(rejection) => {
            log_error(&AppError::Multipart(rejection.body_text()));
            return ParsedForm::default();
        }
    };

    let (form, error) = parse_multipart_form(multipart, max_memory).await;
    if let Some(e) = error {
        log_error(&e);
    }
    form
}
