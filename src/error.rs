//! Error types for receipt processing.

use crate::validation::ValidationError;
use thiserror::Error;

#[cfg(feature = "server")]
use axum::http::StatusCode;

/// Result type alias for store and API operations
pub type Result<T> = std::result::Result<T, ReceiptError>;

/// Errors surfaced to API callers.
#[derive(Error, Debug)]
pub enum ReceiptError {
    /// No receipt stored under this id
    #[error("receipt not found: {0}")]
    NotFound(String),

    /// Request body is not a JSON receipt
    #[error("invalid JSON: {0}")]
    MalformedJson(String),

    /// Well-formed JSON whose fields do not parse
    #[error("invalid receipt: {} field error(s)", .0.len())]
    Invalid(Vec<ValidationError>),

    /// Wrong HTTP verb for the endpoint
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl ReceiptError {
    /// HTTP status for this error
    #[cfg(feature = "server")]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptError::NotFound(_) => StatusCode::NOT_FOUND,
            ReceiptError::MalformedJson(_) | ReceiptError::Invalid(_) => StatusCode::BAD_REQUEST,
            ReceiptError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Machine-readable code used in error bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            ReceiptError::NotFound(_) => "RECEIPT_NOT_FOUND",
            ReceiptError::MalformedJson(_) => "MALFORMED_JSON",
            ReceiptError::Invalid(_) => "INVALID_RECEIPT",
            ReceiptError::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
        }
    }
}

impl From<serde_json::Error> for ReceiptError {
    fn from(err: serde_json::Error) -> Self {
        ReceiptError::MalformedJson(err.to_string())
    }
}
