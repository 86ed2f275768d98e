//! sf-db - Database abstraction layer for sqlferry
//!
//! This crate provides the `Database` trait and the PostgreSQL
//! implementation used by the migration executor.

pub mod error;
pub mod postgres;
pub mod traits;

pub use error::{DbError, DbResult};
pub use postgres::PostgresBackend;
pub use traits::Database;
