//! Mapping store handle.
//!
//! Opened once at startup and passed explicitly to every component that
//! reads or writes links or credentials; closed at shutdown. Repositories
//! borrow the handle's pool and never cache rows.

use crate::{ApiKeyRepository, DbErrorResult, LinkRepository};

use std::path::Path;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the SQLite file at `path`
    pub async fn open(path: &Path, max_connections: u32) -> DbErrorResult<Self> {
        info!("Connecting to database: {}", path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .foreign_keys(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(BUSY_TIMEOUT),
            )
            .await?;

        info!("Database connection established");
        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, embedding)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> DbErrorResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Round trip to confirm the store is reachable
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn links(&self) -> LinkRepository {
        LinkRepository::new(self.pool.clone())
    }

    pub fn api_keys(&self) -> ApiKeyRepository {
        ApiKeyRepository::new(self.pool.clone())
    }
}
