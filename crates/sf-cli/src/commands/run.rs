//! Run command implementation

use anyhow::{Context, Result};
use sf_core::config::ConnectionParameters;
use sf_core::discovery::discover_migrations;
use sf_core::report::{ExecutionResult, ScriptStatus};
use sf_db::PostgresBackend;
use sf_run::{apply_batch, RunError};
use std::path::Path;

use crate::cli::{GlobalArgs, RunArgs};

pub async fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let params = ConnectionParameters {
        host: args.host.clone(),
        port: args.port,
        database: args.database.clone(),
        username: args.username.clone(),
        password: args.password.clone(),
    };

    let db = PostgresBackend::connect(&params)
        .await
        .context("failed to connect to database")?;

    let scripts = discover_migrations(Path::new(&global.migrations_dir))?;
    if scripts.is_empty() {
        log::warn!("no migration scripts found under {}", global.migrations_dir);
    }

    let report = match apply_batch(&db, &scripts).await {
        Ok(report) => report,
        Err(RunError::ConnectionLost { report, detail }) => {
            for result in &report.results {
                print_result(result);
            }
            anyhow::bail!(
                "connection lost after {} of {} scripts: {}",
                report.results.len(),
                scripts.len(),
                detail
            );
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for result in &report.results {
            print_result(result);
        }
        println!("{}", report.summary());
    }

    if args.strict && report.failure_count() > 0 {
        std::process::exit(2);
    }
    Ok(())
}

fn print_result(result: &ExecutionResult) {
    match result.status {
        ScriptStatus::Success => println!(
            "  ok   {} ({} ms, {} rows)",
            result.path,
            result.duration_ms,
            result.rows_returned.len()
        ),
        ScriptStatus::Failed => println!(
            "  FAIL {} ({} ms): {}",
            result.path,
            result.duration_ms,
            result.error_detail.as_deref().unwrap_or("unknown error")
        ),
    }
}
