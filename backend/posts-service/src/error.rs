/// Error types for Posts Service
///
/// Every variant renders through the shared error envelope, so API clients
/// always receive `{ "message": ... }` (plus `errors` for field failures).
use crate::db::StoreError;
use crate::response::error_with_status;
use crate::validators::{FieldErrors, ValidationResult};
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for posts-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A value outside its allowed domain; the description is returned as is
    #[error("{0}")]
    BadRequest(String),

    /// A required key was not present
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Payload validation failed
    #[error("{message}")]
    Validation {
        message: String,
        errors: Option<FieldErrors>,
    },

    #[error("Resource not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Route-level failure whose message is meant for the client
    #[error("{0}")]
    Operation(String),

    /// Anything else; detail is logged, never returned
    #[error("Internal server error")]
    Internal(String),
}

impl From<ValidationResult> for AppError {
    fn from(result: ValidationResult) -> Self {
        let message = result.summary();
        let errors = Some(result.field_errors).filter(|e| !e.is_empty());
        AppError::Validation { message, errors }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::MissingField(_) | AppError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Operation(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if let AppError::Internal(detail) = self {
            tracing::error!(error = %detail, "unhandled internal error");
        } else if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let errors = match self {
            AppError::Validation { errors, .. } => errors.clone(),
            _ => None,
        };

        error_with_status(&self.to_string(), status, errors)
    }
}
