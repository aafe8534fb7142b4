//! HTTP error response conversion
//!
//! Handlers return `Result<Response, HttpAppError>`. Rendering follows the
//! receiver's contract: a missing attachment ends the request with an empty
//! 200, and filesystem failures answer 500 with the raw error text as a
//! plain-text body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use plexhook_core::{AppError, ErrorMetadata, LogLevel};
use plexhook_storage::StorageError;

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rules: both the trait and AppError are foreign to this crate)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        HttpAppError(AppError::Storage(err.to_string()))
    }
}

/// Log an error at the level its metadata asks for
pub fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, error_code, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;
        log_error(app_error);

        if app_error.aborts_silently() {
            return StatusCode::OK.into_response();
        }

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, format!("{}\n", app_error.client_message())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_storage_error_renders_500_with_raw_text() {
        let err: HttpAppError =
            StorageError::CreateFailed("Failed to create file poster.jpg: denied".to_string())
                .into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response).await,
            "Create failed: Failed to create file poster.jpg: denied\n"
        );
    }

    #[tokio::test]
    async fn test_missing_attachment_renders_empty_ok() {
        let err = HttpAppError(AppError::MissingAttachment("thumb".to_string()));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.is_empty());
    }
}
