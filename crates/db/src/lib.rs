//! Persistence for the contact intake service.
//!
//! Postgres via `sqlx` in production; [`store::InMemoryContactStore`] for
//! tests and local runs without a database.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// `connect_timeout` bounds both the initial connection and later pool
/// acquisition, so an unreachable database fails fast at startup.
pub async fn create_pool(database_url: &str, connect_timeout: Duration) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(connect_timeout)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
