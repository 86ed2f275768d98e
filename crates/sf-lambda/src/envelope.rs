//! Invocation response envelope
//!
//! The only externally visible contract: `statusCode` 200 with a textual
//! summary on structural success, 500 with an error description when the
//! connection or discovery failed outright.

use crate::handler::HandlerError;
use serde::{Deserialize, Serialize};
use sf_core::report::BatchReport;

/// Response object returned to the invoking harness
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }

    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            status_code: 500,
            body: format!("Error executing migrations: {}", message),
        }
    }
}

/// Map the pipeline outcome onto the wire contract.
///
/// Migrations having individual failures is not a fatal invocation
/// error; the summary body carries the counts.
pub fn respond(outcome: &Result<BatchReport, HandlerError>) -> InvocationResponse {
    match outcome {
        Ok(report) => InvocationResponse::ok(report.summary()),
        Err(err) => InvocationResponse::error(err),
    }
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
