//! Application error types
//!
//! Errors raised while starting and running the server process. Request
//! failures have their own type in the API crate.

/// Startup and runtime failures of the server process
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage backend unreachable, or its schema could not be applied
    #[error("Database error: {0}")]
    Database(String),

    /// I/O failure with context, e.g. the listener could not bind
    #[error("Internal error: {0:#}")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Machine-readable error code, logged alongside the message
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Config("bad".to_string()).error_code(), "CONFIG_ERROR");
        assert_eq!(AppError::Database("down".to_string()).error_code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_internal_keeps_context_chain() {
        let source = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = AppError::internal(
            Err::<(), _>(source)
                .context("failed to bind to 127.0.0.1:8080")
                .unwrap_err(),
        );

        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert_eq!(
            err.to_string(),
            "Internal error: failed to bind to 127.0.0.1:8080: address in use"
        );
    }
}
