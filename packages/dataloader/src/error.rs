//! Error types for loaders and pagination

use thiserror::Error;

/// Errors raised by loaders and the paginator
///
/// A missing entity is not an error: point lookups resolve to `None` and
/// relation lookups to an empty list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cursor token could not be decoded, or belongs to another list
    #[error("invalid cursor: {0}")]
    InvalidCursor(String),

    /// Bulk fetch answered with a result set that does not line up with its keys
    #[error("batch contract violated for key {key}: {reason}")]
    BatchContract { key: String, reason: String },

    /// Bulk fetch failed inside the entity store
    #[error("entity store error: {0}")]
    Store(String),
}

impl Error {
    pub(crate) fn invalid_cursor(reason: impl Into<String>) -> Self {
        Self::InvalidCursor(reason.into())
    }

    pub(crate) fn batch_contract(key: impl std::fmt::Debug, reason: impl Into<String>) -> Self {
        Self::BatchContract {
            key: format!("{key:?}"),
            reason: reason.into(),
        }
    }
}

/// Result type for loader and pagination operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::batch_contract("book-7", "no result at position 3");
        assert_eq!(
            err.to_string(),
            "batch contract violated for key \"book-7\": no result at position 3"
        );
        assert_eq!(
            Error::invalid_cursor("not base64").to_string(),
            "invalid cursor: not base64"
        );
    }
}
