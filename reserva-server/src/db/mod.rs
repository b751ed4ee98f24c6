//! Database Module
//!
//! Handles SQLite connection pool and migrations

pub mod repository;

use crate::core::Config;
use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Database service, owns the SQLite connection pool
///
/// Opened once at startup and closed explicitly on shutdown; handlers reach
/// it through `ServerState`, never through a global.
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the database described by `config` and apply migrations
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let pool = if config.is_in_memory() {
            Self::open_in_memory().await?
        } else {
            Self::open_file(&config.database_path, config.db_max_connections).await?
        };

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    async fn open_file(db_path: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
        // Build connection options: WAL, normal sync, busy timeout.
        // foreign_keys stays off: deleting a client must not fail because
        // reservations still point at it.
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(false)
            .busy_timeout(Duration::from_secs(5))
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            path = %db_path,
            "Database connection established (SQLite WAL, busy_timeout=5000ms)"
        );
        Ok(pool)
    }

    /// Every connection to `sqlite::memory:` is a separate database, so the
    /// pool is pinned to a single connection that is never recycled.
    async fn open_in_memory() -> Result<SqlitePool, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::debug!("In-memory database opened");
        Ok(pool)
    }

    /// Cheap liveness probe used by the health route
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
