//! Batch execution reporting
//!
//! One `ExecutionResult` exists for every attempted script, failures
//! included; the `BatchReport` preserves discovery order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rows captured from a statement batch: one entry per returned row,
/// column values rendered as text with NULL as `None`.
pub type Rows = Vec<Vec<Option<String>>>;

/// Outcome of a single script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStatus {
    /// Script's statement batch executed without error
    Success,
    /// Script failed; the batch continued past it
    Failed,
}

/// Per-script execution record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Script path relative to the migrations root
    pub path: String,

    /// Success or Failed
    pub status: ScriptStatus,

    /// Rows returned by row-bearing statements, in statement order
    pub rows_returned: Rows,

    /// Error message when status is Failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,

    /// How long the script took to execute (in milliseconds)
    pub duration_ms: u64,
}

impl ExecutionResult {
    /// Record a successful script
    pub fn success(path: &str, rows_returned: Rows, duration_ms: u64) -> Self {
        Self {
            path: path.to_string(),
            status: ScriptStatus::Success,
            rows_returned,
            error_detail: None,
            duration_ms,
        }
    }

    /// Record a failed script
    pub fn failed(path: &str, error_detail: String, duration_ms: u64) -> Self {
        Self {
            path: path.to_string(),
            status: ScriptStatus::Failed,
            rows_returned: Rows::new(),
            error_detail: Some(error_detail),
            duration_ms,
        }
    }
}

/// Ordered record of one migration batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// When the batch started
    pub started_at: DateTime<Utc>,

    /// When the batch finished (or was aborted)
    pub finished_at: DateTime<Utc>,

    /// Per-script results in discovery order
    pub results: Vec<ExecutionResult>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == ScriptStatus::Success)
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == ScriptStatus::Failed)
            .count()
    }

    /// One-line human-readable summary used by both invocation surfaces
    pub fn summary(&self) -> String {
        format!(
            "Executed {} migration scripts: {} succeeded, {} failed",
            self.results.len(),
            self.success_count(),
            self.failure_count()
        )
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
