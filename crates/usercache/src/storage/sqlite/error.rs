//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from
//! `usercache_core::storage`, tagging each failure with its kind.

use std::time::Duration;

use usercache_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - Any `SQLITE_CONSTRAINT_*` → `RepositoryError::ConstraintViolation`
/// - `SQLITE_CANTOPEN`, `SQLITE_NOTADB` → `RepositoryError::Unavailable`
/// - `SQLITE_BUSY`, `SQLITE_LOCKED` → `RepositoryError::Timeout` (busy timeout elapsed)
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, busy_timeout: Duration) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _) => match sqlite_err.code {
            rusqlite::ErrorCode::ConstraintViolation => {
                RepositoryError::ConstraintViolation(err.to_string())
            }
            rusqlite::ErrorCode::CannotOpen | rusqlite::ErrorCode::NotADatabase => {
                RepositoryError::Unavailable(format!("Cannot open database: {err}"))
            }
            rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked => {
                RepositoryError::Timeout(busy_timeout)
            }
            _ => RepositoryError::QueryFailed(err.to_string()),
        },
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
/// It extracts the inner `rusqlite::Error` if present, otherwise
/// maps connection shutdown to `Unavailable` and anything else to
/// `QueryFailed`.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    busy_timeout: Duration,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, busy_timeout)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::Unavailable("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
