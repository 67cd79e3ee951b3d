use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// None of these ever reach a repository caller: the cached repository
/// absorbs them and falls back to the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Cache operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
