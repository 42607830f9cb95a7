//! # Error Handling
//!
//! Crate-wide error types for the rescat service, built on `thiserror`.
//! The API boundary (`crate::api::error`) is the sole translator from these
//! kinds to HTTP status codes.

/// Custom result type for rescat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the rescat service
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network transport errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// Database and storage errors
    #[error("Database error: {context}")]
    Database {
        #[source]
        source: sqlx::Error,
        context: String,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors raised outside the request-validation gate
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity does not exist (or is soft-deleted)
    #[error("{0}")]
    NotFound(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_message() {
        let err = Error::config("bad bind address");
        assert_eq!(err.to_string(), "Configuration error: bad bind address");

        let err = Error::not_found("Resource does not exist!");
        assert_eq!(err.to_string(), "Resource does not exist!");
    }

    #[test]
    fn not_found_is_matchable_by_kind() {
        let err = Error::not_found("gone");
        assert!(matches!(err, Error::NotFound(_)));
        assert!(!matches!(Error::validation("x"), Error::NotFound(_)));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
