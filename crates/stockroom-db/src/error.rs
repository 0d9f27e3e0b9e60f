//! # Database Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (stockroom-core)     SQLite Error (sqlx::Error)       │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  DbError::Validation            DbError::{QueryFailed, ...}            │
//! │       │                                    │                            │
//! │       └──────────────┬─────────────────────┘                            │
//! │                      ▼                                                  │
//! │  ApiError (stockroom-app) ← Serialized for the presentation layer      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing row is never an error here: `get_by_id` returns `None`, and
//! `update`/`delete` report zero affected rows.

use sqlx::error::ErrorKind;
use stockroom_core::ValidationError;
use thiserror::Error;

/// Store operation errors.
///
/// Everything except [`DbError::Validation`] is a storage failure; see
/// [`DbError::is_storage`].
#[derive(Debug, Error)]
pub enum DbError {
    /// The input was rejected before anything was written.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A table constraint rejected the write.
    ///
    /// ## When This Occurs
    /// - `CHECK (quantity >= 0)` or a NOT NULL column, when a caller
    ///   bypasses the validation layer
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created or opened
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Returns true for failures of the storage engine (I/O, corruption,
    /// constraint, pool), false for rejected input.
    pub fn is_storage(&self) -> bool {
        !matches!(self, DbError::Validation(_))
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (constraint)  → DbError::ConstraintViolation
/// sqlx::Error::Database (other)       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut           → DbError::PoolExhausted
/// sqlx::Error::PoolClosed             → DbError::ConnectionFailed
/// Other                               → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation => {
                    DbError::ConstraintViolation(db_err.message().to_string())
                }
                _ => DbError::QueryFailed(db_err.message().to_string()),
            },

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
