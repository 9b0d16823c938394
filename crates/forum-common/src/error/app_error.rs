//! Application error types
//!
//! Unified error handling at the boundary between the use cases and whatever
//! transport serves them.

use forum_core::DomainError;
use serde::Serialize;

use super::translator::{DomainErrorTranslator, SERVER_FAILURE_MESSAGE};
use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    // Database errors raised outside a repository (pool setup)
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_validation() {
                    400
                } else if e.is_authorization() {
                    403
                } else if e.is_not_found() {
                    404
                } else {
                    500
                }
            }
            Self::Config(_) | Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> String {
        match self {
            Self::Domain(e) => e.code(),
            Self::Config(_) => "CONFIG_ERROR".to_string(),
            Self::Database(_) => "DATABASE_ERROR".to_string(),
            Self::Internal(_) => "INTERNAL_ERROR".to_string(),
        }
    }

    /// User-facing message, localized for domain errors
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(e) => DomainErrorTranslator::translate(e),
            _ => SERVER_FAILURE_MESSAGE,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// `fail` for caller mistakes, `error` for ours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Fail,
    Error,
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            status: if err.is_client_error() {
                ResponseStatus::Fail
            } else {
                ResponseStatus::Error
            },
            code: err.error_code(),
            message: err.user_message().to_string(),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
