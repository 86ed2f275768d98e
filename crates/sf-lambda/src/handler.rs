//! Lambda-side migration pipeline

use sf_core::config::ConnectionParameters;
use sf_core::discovery::discover_migrations;
use sf_core::report::BatchReport;
use sf_db::PostgresBackend;
use sf_run::{apply_batch, RunError};
use std::path::Path;
use thiserror::Error;

/// Root path baked into the deployment image
pub const DEFAULT_MIGRATIONS_PATH: &str = "/migrations";

/// Fatal pipeline errors, one variant per taxonomy category
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Config or discovery failure
    #[error(transparent)]
    Core(#[from] sf_core::CoreError),

    /// Connection could not be established
    #[error(transparent)]
    Db(#[from] sf_db::DbError),

    /// Connection lost mid-batch
    #[error(transparent)]
    Run(#[from] RunError),
}

/// Connect, discover, and apply.
///
/// Connects first: if the database is unreachable, discovery is never
/// attempted. Individual script failures are inside the report, not here.
pub async fn run_migrations(
    params: &ConnectionParameters,
    migrations_path: &Path,
) -> Result<BatchReport, HandlerError> {
    let db = PostgresBackend::connect(params).await?;
    let scripts = discover_migrations(migrations_path)?;
    if scripts.is_empty() {
        log::warn!(
            "no migration scripts found under {}",
            migrations_path.display()
        );
    }

    match apply_batch(&db, &scripts).await {
        Ok(report) => {
            log::info!("{}", report.summary());
            Ok(report)
        }
        Err(err) => {
            let RunError::ConnectionLost { report, .. } = &err;
            log::error!(
                "batch aborted after {} scripts; partial progress: {}",
                report.results.len(),
                report.summary()
            );
            Err(err.into())
        }
    }
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod tests;
