//! Error types module
//!
//! All failures of the webhook receiver are unified under `AppError`. How each
//! variant surfaces to the sender is described by `ErrorMetadata`: most are
//! only logged, a missing attachment ends the request with an empty response,
//! and filesystem failures become a 500 carrying the raw error text.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like malformed payloads
    Debug,
    /// Warning level - for degraded input like oversized forms
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;

    /// Whether the request ends with an empty default response instead of an error body
    fn aborts_silently(&self) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Multipart form exceeds {limit} bytes of in-memory storage")]
    FormTooLarge { limit: usize },

    #[error("Malformed multipart form: {0}")]
    Multipart(String),

    #[error("Error retrieving the file: {0}")]
    MissingAttachment(String),

    #[error("{0}")]
    Storage(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidPayload(err.to_string())
    }
}

impl AppError {
    /// Error type name used in structured logs
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidPayload(_) => "InvalidPayload",
            AppError::FormTooLarge { .. } => "FormTooLarge",
            AppError::Multipart(_) => "Multipart",
            AppError::MissingAttachment(_) => "MissingAttachment",
            AppError::Storage(_) => "Storage",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidPayload(_)
            | AppError::FormTooLarge { .. }
            | AppError::Multipart(_)
            | AppError::MissingAttachment(_) => 200,
            AppError::Storage(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidPayload(_) => "INVALID_PAYLOAD",
            AppError::FormTooLarge { .. } => "FORM_TOO_LARGE",
            AppError::Multipart(_) => "MULTIPART_ERROR",
            AppError::MissingAttachment(_) => "MISSING_ATTACHMENT",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Raw filesystem error text is returned to the sender as-is
            AppError::Storage(msg) => msg.clone(),
            _ => String::new(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidPayload(_) => LogLevel::Debug,
            AppError::FormTooLarge { .. }
            | AppError::Multipart(_)
            | AppError::MissingAttachment(_) => LogLevel::Warn,
            AppError::Storage(_) => LogLevel::Error,
        }
    }

    fn aborts_silently(&self) -> bool {
        matches!(self, AppError::MissingAttachment(_))
    }
}
