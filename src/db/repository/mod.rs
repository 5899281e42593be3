//! Repository Module
//!
//! Free functions over `&SqlitePool`. Every public operation is a single
//! statement (or a count + page pair for listing); there are no
//! cross-statement transactions.

pub mod asset;
pub mod principal;
pub mod product;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
