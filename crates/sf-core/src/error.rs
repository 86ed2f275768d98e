//! Error types for sf-core

use thiserror::Error;

/// Core error type for sqlferry
///
/// Config and discovery failures are fatal: they abort the invocation
/// before any script runs. Per-script execution errors live in sf-db.
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Required environment variable not set
    #[error("[E001] Missing required environment variable: {name}")]
    ConfigMissingEnv { name: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Migrations directory not found
    #[error("[E003] Migrations directory not found: {path}")]
    MigrationsDirNotFound { path: String },

    /// E004: I/O error with path context
    #[error("[E004] I/O error at {path}: {source}")]
    IoWithPath {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
