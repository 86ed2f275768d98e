//! Migration batch execution

use chrono::Utc;
use sf_core::discovery::MigrationScript;
use sf_core::report::{BatchReport, ExecutionResult};
use sf_db::{Database, DbError};
use std::time::Instant;
use thiserror::Error;

/// Fatal executor errors
#[derive(Error, Debug)]
pub enum RunError {
    /// R001: connection lost mid-batch; remaining scripts were not attempted
    #[error("[R001] Database connection lost mid-batch: {detail}")]
    ConnectionLost {
        /// Results recorded before the connection dropped
        report: BatchReport,
        detail: String,
    },
}

/// Result type alias for RunError
pub type RunResult<T> = Result<T, RunError>;

/// Apply every script in discovery order on a single connection.
///
/// Scripts that fail are recorded as Failed and the batch continues;
/// later scripts may be independent of the broken one. The loop only
/// aborts when the connection itself is gone, returning the partial
/// report inside the error.
pub async fn apply_batch(
    db: &dyn Database,
    scripts: &[MigrationScript],
) -> RunResult<BatchReport> {
    let started_at = Utc::now();
    let mut results = Vec::with_capacity(scripts.len());

    for script in scripts {
        let timer = Instant::now();
        match db.run_batch(&script.contents).await {
            Ok(rows) => {
                let duration_ms = timer.elapsed().as_millis() as u64;
                log::info!(
                    "{}: applied in {} ms ({} rows returned)",
                    script.relative_path,
                    duration_ms,
                    rows.len()
                );
                results.push(ExecutionResult::success(
                    &script.relative_path,
                    rows,
                    duration_ms,
                ));
            }
            Err(DbError::ConnectionLost(detail)) => {
                log::error!(
                    "{}: aborting batch, connection lost: {}",
                    script.relative_path,
                    detail
                );
                return Err(RunError::ConnectionLost {
                    report: BatchReport {
                        started_at,
                        finished_at: Utc::now(),
                        results,
                    },
                    detail,
                });
            }
            Err(err) => {
                let duration_ms = timer.elapsed().as_millis() as u64;
                log::warn!("{}: failed: {}", script.relative_path, err);
                results.push(ExecutionResult::failed(
                    &script.relative_path,
                    err.to_string(),
                    duration_ms,
                ));
            }
        }
    }

    Ok(BatchReport {
        started_at,
        finished_at: Utc::now(),
        results,
    })
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
