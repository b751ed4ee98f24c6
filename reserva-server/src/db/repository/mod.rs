//! Repository Module
//!
//! CRUD operations over the SQLite tables. Every function takes the pool
//! explicitly; there is no repository object to construct.

pub mod cliente;
pub mod reserva;

use crate::utils::{AppError, AppResult, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// A UNIQUE constraint rejected the write
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => {
                AppError::new(ErrorCode::AlreadyExists).with_details(msg)
            }
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Outcome of an UPDATE: the re-read record and how many rows changed
#[derive(Debug, Clone, PartialEq)]
pub struct Updated<T> {
    pub record: Option<T>,
    pub changes: u64,
}

impl<T> Updated<T> {
    pub fn is_empty(&self) -> bool {
        self.changes == 0
    }

    /// The updated record, or `not_found` when the row vanished after the
    /// handler's existence check
    pub fn found(self, not_found: ErrorCode) -> AppResult<T> {
        match self.record {
            Some(record) if self.changes > 0 => Ok(record),
            _ => Err(AppError::new(not_found)),
        }
    }
}

/// A DELETE that removed nothing is reported as `not_found`
pub fn ensure_deleted(rows: u64, not_found: ErrorCode) -> AppResult<()> {
    if rows == 0 {
        return Err(AppError::new(not_found));
    }
    Ok(())
}
