//! sf-core - Core library for sqlferry
//!
//! This crate provides the connection configuration, migration discovery,
//! error taxonomy, and batch reporting types shared by the sqlferry
//! invocation surfaces (Lambda and CLI).

pub mod config;
pub mod discovery;
pub mod error;
pub mod report;

pub use config::ConnectionParameters;
pub use discovery::{discover_migrations, MigrationScript};
pub use error::{CoreError, CoreResult};
pub use report::{BatchReport, ExecutionResult, Rows, ScriptStatus};
