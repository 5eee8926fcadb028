//! Application error type and its HTTP representation.
//!
//! Every error is rendered as a flat JSON body:
//!
//! ```json
//! { "error": "Short URL not found" }
//! ```

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client input error (400).
    #[error("{0}")]
    BadRequest(String),

    /// Unknown, expired, or unresolvable short code (404).
    #[error("{0}")]
    NotFound(String),

    /// Storage or server-side failure (500).
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let AppError::Internal(ref message) = self {
            tracing::error!("Internal error: {}", message);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Uses the message of the first failing field.
///
/// Field order inside [`ValidationErrors`] is unspecified, so request DTOs
/// validate through a single field-level check.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::BadRequest(message)
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::BadRequest(format!("Invalid JSON payload: {}", rejection.body_text()))
    }
}

/// Request bodies are decoded regardless of `Content-Type`, so every decode
/// failure surfaces here.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("Invalid JSON payload: {}", err))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(format!("Storage error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_is_message() {
        let err = AppError::not_found("Short URL not found");
        assert_eq!(err.to_string(), "Short URL not found");
    }

    #[test]
    fn test_from_validation_errors_uses_message() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "long_url",
            ValidationError::new("required").with_message("long_url is required".into()),
        );

        let err = AppError::from(errors);
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "long_url is required"));
    }

    #[test]
    fn test_from_validation_errors_without_message() {
        let mut errors = ValidationErrors::new();
        errors.add("long_url", ValidationError::new("url"));

        let err = AppError::from(errors);
        assert_eq!(err.to_string(), "Invalid request");
    }

    #[test]
    fn test_from_json_error_is_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let app_err = AppError::from(err);

        assert_eq!(app_err.status_code(), StatusCode::BAD_REQUEST);
        assert!(app_err.to_string().starts_with("Invalid JSON payload: "));
    }

    #[test]
    fn test_from_store_error_is_internal() {
        let err = AppError::from(StoreError::Connection("refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("refused"));
    }
}
