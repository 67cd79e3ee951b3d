use std::time::Duration;

use thiserror::Error;

use crate::users::UserValidationError;

/// Errors that can occur during repository operations.
///
/// Every variant except `Validation` originates in the store and is surfaced
/// to the caller unchanged. Cache failures never appear here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Invalid input: {0}")]
    Validation(#[from] UserValidationError),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
