//! Database connection configuration

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// Connection parameters for the target PostgreSQL database.
///
/// Constructed explicitly by the invocation surface (Lambda environment or
/// CLI arguments) and passed into the backend. Immutable for the duration
/// of one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParameters {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl ConnectionParameters {
    /// Build connection parameters from the POSTGRES_* environment
    /// variables used by the deployment tooling.
    pub fn from_env() -> CoreResult<Self> {
        Ok(Self {
            host: require_env("POSTGRES_HOST")?,
            port: parse_port(&require_env("POSTGRES_PORT")?)?,
            database: require_env("POSTGRES_DB")?,
            username: require_env("POSTGRES_USER")?,
            password: require_env("POSTGRES_PASSWORD")?,
        })
    }
}

// Password must never reach logs through Debug formatting.
impl fmt::Debug for ConnectionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParameters")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn require_env(name: &str) -> CoreResult<String> {
    std::env::var(name).map_err(|_| CoreError::ConfigMissingEnv {
        name: name.to_string(),
    })
}

fn parse_port(raw: &str) -> CoreResult<u16> {
    raw.parse().map_err(|_| CoreError::ConfigInvalid {
        message: format!("POSTGRES_PORT is not a valid port number: '{}'", raw),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
