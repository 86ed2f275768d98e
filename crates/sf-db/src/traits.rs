//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use sf_core::report::Rows;

/// Database abstraction trait for sqlferry
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a script's full text as one statement batch.
    ///
    /// The driver is responsible for splitting semicolon-delimited
    /// statements; each batch that completes is durably committed before
    /// the next script runs. Returns any rows produced by row-bearing
    /// statements, in statement order.
    ///
    /// Fails with `ExecutionError` when the batch itself is bad, or
    /// `ConnectionLost` when the session is gone. `ConnectionError` is
    /// only produced at connect time, never by this method.
    async fn run_batch(&self, sql: &str) -> DbResult<Rows>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
