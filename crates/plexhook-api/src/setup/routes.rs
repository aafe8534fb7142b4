//! Route configuration
//!
//! The route table is built once at startup and handed to the server.

use crate::constants::WEBHOOK_PATH;
use crate::handlers;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::any, Router};
use plexhook_core::Config;
use plexhook_infra::request_id_middleware;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Setup the webhook route
///
/// Every method is routed to the handler, which ignores anything but POST.
/// Axum's default body limit is disabled; the multipart reader enforces the
/// configured in-memory budget instead.
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    tracing::debug!(
        path = WEBHOOK_PATH,
        max_form_memory_bytes = config.max_form_memory_bytes(),
        "Registering webhook route"
    );

    Router::new()
        .route(WEBHOOK_PATH, any(handlers::plex_webhook))
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
}
