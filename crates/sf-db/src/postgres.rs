//! PostgreSQL database backend implementation
//!
//! Uses the simple-query protocol so a script's full text goes to the
//! server as one batch: the server splits semicolon-delimited statements,
//! and outside an explicit transaction each batch is committed as soon as
//! it completes. This matches the runner's no-cross-script-transaction
//! contract.

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use sf_core::config::ConnectionParameters;
use sf_core::report::Rows;
use tokio_postgres::{Client, NoTls, SimpleQueryMessage};

/// PostgreSQL database backend
///
/// Owns one client; the connection task is spawned at connect time and
/// winds down when the backend is dropped, so the connection is closed on
/// every exit path.
#[derive(Debug)]
pub struct PostgresBackend {
    client: Client,
}

impl PostgresBackend {
    /// Open a connection from explicit parameters.
    ///
    /// Fails with `ConnectionError` if the endpoint is unreachable, the
    /// credentials are rejected, or the database does not exist.
    pub async fn connect(params: &ConnectionParameters) -> DbResult<Self> {
        let config = pg_config(params);
        let (client, connection) = config
            .connect(NoTls)
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("postgres connection task ended with error: {}", e);
            }
        });

        log::info!(
            "connected to {}:{}/{} as {}",
            params.host,
            params.port,
            params.database,
            params.username
        );
        Ok(Self { client })
    }
}

/// Build the driver config from connection parameters
fn pg_config(params: &ConnectionParameters) -> tokio_postgres::Config {
    let mut config = tokio_postgres::Config::new();
    config
        .host(&params.host)
        .port(params.port)
        .dbname(&params.database)
        .user(&params.username)
        .password(&params.password);
    config
}

#[async_trait]
impl Database for PostgresBackend {
    async fn run_batch(&self, sql: &str) -> DbResult<Rows> {
        if self.client.is_closed() {
            return Err(DbError::ConnectionLost(
                "connection is already closed".to_string(),
            ));
        }

        let messages = self.client.simple_query(sql).await?;

        let mut rows = Rows::new();
        for message in messages {
            if let SimpleQueryMessage::Row(row) = message {
                let mut values = Vec::with_capacity(row.len());
                for i in 0..row.len() {
                    values.push(row.get(i).map(str::to_string));
                }
                rows.push(values);
            }
        }
        Ok(rows)
    }

    fn db_type(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
