use super::*;
use chrono::Utc;
use sf_core::report::{ExecutionResult, Rows};
use sf_db::DbError;

fn report_with_failure() -> BatchReport {
    let now = Utc::now();
    BatchReport {
        started_at: now,
        finished_at: now,
        results: vec![
            ExecutionResult::success("001_init.sql", Rows::new(), 4),
            ExecutionResult::failed("002_bad.sql", "syntax error".to_string(), 2),
            ExecutionResult::success("003_seed.sql", Rows::new(), 7),
        ],
    }
}

#[test]
fn test_structural_success_is_200_even_with_script_failures() {
    let outcome = Ok(report_with_failure());
    let response = respond(&outcome);
    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.body,
        "Executed 3 migration scripts: 2 succeeded, 1 failed"
    );
}

#[test]
fn test_connection_failure_is_500() {
    let outcome = Err(HandlerError::Db(DbError::ConnectionError(
        "password authentication failed for user \"migrator\"".to_string(),
    )));
    let response = respond(&outcome);
    assert_eq!(response.status_code, 500);
    assert!(response.body.starts_with("Error executing migrations:"));
    assert!(response.body.contains("connection failed"));
}

#[test]
fn test_discovery_failure_is_500() {
    let outcome = Err(HandlerError::Core(
        sf_core::CoreError::MigrationsDirNotFound {
            path: "/migrations".to_string(),
        },
    ));
    let response = respond(&outcome);
    assert_eq!(response.status_code, 500);
    assert!(response.body.contains("Migrations directory not found"));
}

#[test]
fn test_envelope_field_names() {
    let response = InvocationResponse::ok("done");
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["statusCode"], 200);
    assert_eq!(json["body"], "done");
}
