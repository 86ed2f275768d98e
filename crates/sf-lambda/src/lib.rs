//! sf-lambda - Lambda invocation surface for sqlferry
//!
//! This crate owns the runtime integration details: the migration
//! pipeline run by the handler and the response envelope returned to the
//! invoker. Per-script failures surface in logs and the summary body,
//! never in the status code; only connection and discovery failures are
//! fatal.

pub mod envelope;
pub mod handler;

pub use envelope::{respond, InvocationResponse};
pub use handler::{run_migrations, HandlerError, DEFAULT_MIGRATIONS_PATH};
