use super::*;
use async_trait::async_trait;
use sf_core::report::{Rows, ScriptStatus};
use sf_db::DbResult;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted outcome for one run_batch call
enum Outcome {
    Rows(Rows),
    Fail(&'static str),
    Lost(&'static str),
    Refused(&'static str),
}

/// Fake database that replays scripted outcomes in order and records
/// every SQL batch it receives.
struct FakeDatabase {
    outcomes: Mutex<VecDeque<Outcome>>,
    executed: Mutex<Vec<String>>,
}

impl FakeDatabase {
    fn new(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            executed: Mutex::new(Vec::new()),
        }
    }

    fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Database for FakeDatabase {
    async fn run_batch(&self, sql: &str) -> DbResult<Rows> {
        self.executed.lock().unwrap().push(sql.to_string());
        match self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected run_batch call")
        {
            Outcome::Rows(rows) => Ok(rows),
            Outcome::Fail(detail) => Err(DbError::ExecutionError(detail.to_string())),
            Outcome::Lost(detail) => Err(DbError::ConnectionLost(detail.to_string())),
            Outcome::Refused(detail) => Err(DbError::ConnectionError(detail.to_string())),
        }
    }

    fn db_type(&self) -> &'static str {
        "fake"
    }
}

fn script(path: &str, sql: &str) -> MigrationScript {
    MigrationScript {
        relative_path: path.to_string(),
        contents: sql.to_string(),
    }
}

#[tokio::test]
async fn test_empty_batch() {
    let db = FakeDatabase::new(vec![]);
    let report = apply_batch(&db, &[]).await.unwrap();
    assert!(report.results.is_empty());
    assert_eq!(report.summary(), "Executed 0 migration scripts: 0 succeeded, 0 failed");
}

#[tokio::test]
async fn test_scripts_applied_in_order() {
    let db = FakeDatabase::new(vec![Outcome::Rows(Rows::new()), Outcome::Rows(Rows::new())]);
    let scripts = [
        script("001_init.sql", "CREATE TABLE a (id INT);"),
        script("002_more.sql", "CREATE TABLE b (id INT);"),
    ];

    let report = apply_batch(&db, &scripts).await.unwrap();
    assert_eq!(report.success_count(), 2);
    assert_eq!(
        db.executed(),
        vec!["CREATE TABLE a (id INT);", "CREATE TABLE b (id INT);"]
    );
}

#[tokio::test]
async fn test_failed_script_does_not_stop_batch() {
    let db = FakeDatabase::new(vec![
        Outcome::Rows(Rows::new()),
        Outcome::Fail("syntax error at or near \"CREAT\""),
        Outcome::Rows(Rows::new()),
    ]);
    let scripts = [
        script("001_ok.sql", "SELECT 1;"),
        script("002_bad.sql", "CREAT TABLE broken;"),
        script("003_ok.sql", "SELECT 3;"),
    ];

    let report = apply_batch(&db, &scripts).await.unwrap();
    assert_eq!(db.executed().len(), 3);
    assert_eq!(report.results[0].status, ScriptStatus::Success);
    assert_eq!(report.results[1].status, ScriptStatus::Failed);
    assert_eq!(report.results[2].status, ScriptStatus::Success);

    let detail = report.results[1].error_detail.as_deref().unwrap();
    assert!(!detail.is_empty());
    assert!(detail.contains("syntax error"));
}

#[tokio::test]
async fn test_rows_captured_on_success() {
    let rows = vec![vec![Some("PostgreSQL 16.2".to_string())]];
    let db = FakeDatabase::new(vec![Outcome::Rows(rows)]);
    let scripts = [script("001_version.sql", "SELECT version();")];

    let report = apply_batch(&db, &scripts).await.unwrap();
    let result = &report.results[0];
    assert_eq!(result.status, ScriptStatus::Success);
    assert_eq!(result.rows_returned.len(), 1);
    assert_eq!(
        result.rows_returned[0][0].as_deref(),
        Some("PostgreSQL 16.2")
    );
}

#[tokio::test]
async fn test_connect_category_error_is_contained_with_own_message() {
    // Backends only produce ConnectionError at connect time; if one leaks
    // out of run_batch anyway it must be recorded under its own message,
    // not reported as a lost connection.
    let db = FakeDatabase::new(vec![
        Outcome::Refused("server closed the connection unexpectedly"),
        Outcome::Rows(Rows::new()),
    ]);
    let scripts = [
        script("001_odd.sql", "SELECT 1;"),
        script("002_ok.sql", "SELECT 2;"),
    ];

    let report = apply_batch(&db, &scripts).await.unwrap();
    assert_eq!(db.executed().len(), 2);
    assert_eq!(report.results[0].status, ScriptStatus::Failed);
    let detail = report.results[0].error_detail.as_deref().unwrap();
    assert!(detail.contains("connection failed"));
    assert!(!detail.contains("connection lost"));
    assert_eq!(report.results[1].status, ScriptStatus::Success);
}

#[tokio::test]
async fn test_connection_lost_aborts_with_partial_report() {
    let db = FakeDatabase::new(vec![
        Outcome::Rows(Rows::new()),
        Outcome::Lost("connection reset by peer"),
    ]);
    let scripts = [
        script("001_ok.sql", "SELECT 1;"),
        script("002_dies.sql", "SELECT 2;"),
        script("003_never_runs.sql", "SELECT 3;"),
    ];

    let err = apply_batch(&db, &scripts).await.unwrap_err();
    // Third script must not have been attempted.
    assert_eq!(db.executed().len(), 2);
    let RunError::ConnectionLost { report, detail } = err;
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].path, "001_ok.sql");
    assert_eq!(detail, "connection reset by peer");
}
