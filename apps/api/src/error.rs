//! Error handling for the Bookshelf API
//!
//! This module provides the API error type using thiserror, with error codes
//! attached to GraphQL field errors via `ErrorExtensions`.

use async_graphql::ErrorExtensions;
use axum::http::StatusCode;
use bookshelf_shared_config::ConfigError;
use thiserror::Error;

/// Main API error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // ========== Client Errors ==========
    /// Pagination cursor could not be decoded or belongs to another list
    #[error("invalid cursor: {0}")]
    InvalidCursor(String),

    // ========== Data Access Errors ==========
    /// Bulk fetch answered with results that do not line up with its keys
    #[error("batch contract violated for key {key}: {reason}")]
    BatchContract { key: String, reason: String },

    /// Bulk fetch failed inside the catalog
    #[error("store error: {0}")]
    Store(String),

    // ========== Configuration Errors ==========
    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    // ========== Internal Errors ==========
    /// Internal server error (catch-all for unexpected errors)
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code this error would carry on a REST route
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCursor(_) => StatusCode::BAD_REQUEST,
            Self::BatchContract { .. }
            | Self::Store(_)
            | Self::Configuration(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCursor(_) => "INVALID_CURSOR",
            Self::BatchContract { .. } => "BATCH_CONTRACT_VIOLATION",
            Self::Store(_) => "STORE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        self.log();

        let code = self.error_code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

// ========== Conversion Implementations ==========

impl From<bookshelf_dataloader::Error> for ApiError {
    fn from(err: bookshelf_dataloader::Error) -> Self {
        use bookshelf_dataloader::Error;

        match err {
            Error::InvalidCursor(reason) => Self::InvalidCursor(reason),
            Error::BatchContract { key, reason } => Self::BatchContract { key, reason },
            Error::Store(message) => Self::Store(message),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        // Try to downcast to ApiError first
        match err.downcast::<ApiError>() {
            Ok(api_err) => api_err,
            Err(err) => Self::Internal(err.to_string()),
        }
    }
}

/// Convert a core error into a GraphQL error carrying its code
pub fn graphql_error(err: bookshelf_dataloader::Error) -> async_graphql::Error {
    ApiError::from(err).extend()
}
