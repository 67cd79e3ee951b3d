//! Pure functions for mapping repository errors to process exit codes.
//!
//! The codes follow the BSD `sysexits.h` conventions so scripts can tell bad
//! input apart from an unreachable store:
//!
//! - `Validation` -> 65 (`EX_DATAERR`)
//! - `ConstraintViolation` -> 65 (`EX_DATAERR`)
//! - `Unavailable` -> 69 (`EX_UNAVAILABLE`)
//! - `QueryFailed` -> 70 (`EX_SOFTWARE`)
//! - `Timeout` -> 75 (`EX_TEMPFAIL`)

use super::RepositoryError;

/// Maps a [`RepositoryError`] to a process exit code.
///
/// # Examples
///
/// ```
/// use usercache_core::storage::{repository_error_to_exit_code, RepositoryError};
///
/// let error = RepositoryError::Unavailable("connection refused".to_string());
/// assert_eq!(repository_error_to_exit_code(&error), 69);
/// ```
pub fn repository_error_to_exit_code(error: &RepositoryError) -> u8 {
    match error {
        RepositoryError::Validation(_) => 65,
        RepositoryError::ConstraintViolation(_) => 65,
        RepositoryError::Unavailable(_) => 69,
        RepositoryError::QueryFailed(_) => 70,
        RepositoryError::Timeout(_) => 75,
    }
}
