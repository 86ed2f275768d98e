//! sf-run - Migration executor for sqlferry
//!
//! Applies discovered scripts strictly in order on a single connection.
//! A failing script is recorded in the batch report and execution
//! continues; only a lost connection aborts the loop.

pub mod executor;

pub use executor::{apply_batch, RunError, RunResult};
