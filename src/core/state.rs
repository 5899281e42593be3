//! Shared server state
//!
//! One instance is created at startup and cloned into every handler.
//! There is no other in-process shared mutable state; each request
//! works against the connection pool.

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::{self, DbService};
use crate::utils::AppError;

#[derive(Clone)]
pub struct ServerState {
    pub db: DbService,
    pub config: Config,
}

impl ServerState {
    /// Open the database, run migrations and seed the admin principal.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = if config.database_path == ":memory:" {
            DbService::in_memory().await?
        } else {
            DbService::new(&config.database_path).await?
        };

        db::seed::ensure_admin(&db.pool, config).await?;

        Ok(Self {
            db,
            config: config.clone(),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
