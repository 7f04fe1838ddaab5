use std::sync::Arc;
use std::time::Duration;

use ssp_db::store::{ContactStore, PgContactStore};

use crate::config::ServerConfig;

/// Whether contacts are actually stored.
///
/// Decided once at startup and never changed afterwards.
#[derive(Clone)]
pub enum Persistence {
    /// Writes and reads go to the store.
    Available(Arc<dyn ContactStore>),
    /// Demo mode: submissions are validated and acknowledged, not stored.
    Degraded,
}

impl Persistence {
    pub fn is_demo(&self) -> bool {
        matches!(self, Persistence::Degraded)
    }
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub persistence: Persistence,
}

/// Failure to bring up the Postgres-backed store.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migrations failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Connect to Postgres, verify it, and apply migrations.
pub async fn connect_store(config: &ServerConfig) -> Result<PgContactStore, StartupError> {
    let timeout = Duration::from_secs(config.db_connect_timeout_secs);
    let pool = ssp_db::create_pool(&config.database_url, timeout).await?;
    tracing::info!("Database connection pool created");

    ssp_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    ssp_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(PgContactStore::new(pool))
}

/// Resolve persistence for the process: the real store, or demo mode when
/// the database cannot be reached and `strict_persistence` is off.
pub async fn resolve_persistence(config: &ServerConfig) -> Result<Persistence, StartupError> {
    match connect_store(config).await {
        Ok(store) => Ok(Persistence::Available(Arc::new(store))),
        Err(err) if !config.strict_persistence => {
            tracing::warn!(error = %err, "Database unavailable, running in demo mode");
            Ok(Persistence::Degraded)
        }
        Err(err) => Err(err),
    }
}
