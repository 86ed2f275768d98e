//! Error types for sf-db

use thiserror::Error;

/// Database operation errors
///
/// `ConnectionError` and `ConnectionLost` are fatal to an invocation;
/// `ExecutionError` is contained per script by the executor.
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection could not be established (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Statement batch failed (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Connection lost mid-batch (D003)
    #[error("[D003] Database connection lost: {0}")]
    ConnectionLost(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<tokio_postgres::Error> for DbError {
    fn from(err: tokio_postgres::Error) -> Self {
        // A closed connection is fatal to the batch; anything else is a
        // per-script execution failure.
        if err.is_closed() {
            DbError::ConnectionLost(err.to_string())
        } else {
            DbError::ExecutionError(err.to_string())
        }
    }
}
