//! Unified error types and result handling.
//!
//! Every layer returns [`Result`]. The HTTP layer turns an [`Error`] into a
//! response through its `IntoResponse` impl, so handlers can use `?` freely.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// All errors produced by the benefits backend.
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced record does not exist
    #[error("{entity} not found")]
    NotFound {
        /// Human-readable entity name, e.g. "Business owner"
        entity: &'static str,
        /// Identifier that failed to resolve
        id: String,
    },

    /// The request is well-formed but cannot be processed
    #[error("{message}")]
    InvalidRequest {
        /// Explanation returned to the client
        message: String,
    },

    /// Input failed field validation before reaching the store
    #[error("Validation error: {message}")]
    Validation {
        /// Field-level validation failures
        message: String,
    },

    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (binding sockets, creating the data directory)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable present but unreadable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation {
            message: errors.to_string(),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
        }
    }
}

impl Error {
    /// Shorthand for a [`Error::NotFound`] on the given entity.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// HTTP status code reported to clients for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Config { .. } | Self::Database(_) | Self::Io(_) | Self::EnvVar(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed with server error");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::not_found("Employee", "abc").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::InvalidRequest {
                message: "nope".to_string()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::Validation {
                message: "email".to_string()
            }
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            Error::Database(sea_orm::DbErr::Custom("boom".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::EnvVar(std::env::VarError::NotPresent).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = Error::not_found("Business owner", "123");
        assert_eq!(err.to_string(), "Business owner not found");
    }
}
