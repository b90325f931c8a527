use thiserror::Error;

use crate::domain::product::StockError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,
    /// A stock change was rejected by the domain guard.
    #[error(transparent)]
    Stock(#[from] StockError),
    /// A stored row could not be turned into a domain value.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// No connection could be checked out of the pool.
    #[error("connection error: {0}")]
    ConnectionError(#[from] diesel::r2d2::PoolError),
    /// The database rejected a statement.
    #[error("database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),
    /// Schema bootstrap failed.
    #[error("migration error: {0}")]
    Migration(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
