//! Error types for gateway operations.

use thiserror::Error;

/// Errors returned by the address book gateway.
///
/// Errors are surfaced to the caller as-is; nothing is retried.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The pool could not be created or the database is unreachable.
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// A query, statement or row conversion failed.
    #[error("Storage error: {0}")]
    Storage(#[source] sqlx::Error),

    /// The filter builder was handed something it cannot render.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl GatewayError {
    pub fn is_connection(&self) -> bool {
        matches!(self, GatewayError::Connection(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, GatewayError::Storage(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, GatewayError::Validation(_))
    }
}

impl From<sqlx::Error> for GatewayError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => GatewayError::Connection(err),
            _ => GatewayError::Storage(err),
        }
    }
}
