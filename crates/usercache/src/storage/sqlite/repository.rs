//! SQLite repository implementation.
//!
//! Implements [`UserRepository`] from `usercache_core::storage` using SQLite.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use usercache_core::storage::{Result, UserRepository};
use usercache_core::users::{NewUser, User};

use super::conversions::row_to_user;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Holds only the database location. Every operation opens its own
/// connection and closes it before returning, on success and on failure.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteRepository {
    /// Creates a new repository backed by the database file at `path`.
    ///
    /// The database file will be created if it doesn't exist and the schema
    /// is created automatically. `busy_timeout` bounds how long a statement
    /// waits on a locked database.
    pub async fn new(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self> {
        let repository = Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout,
        };

        repository
            .with_connection(|conn| {
                conn.execute_batch(schema::CREATE_TABLES)
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await?;

        tracing::debug!(path = %repository.path.display(), "SQLite schema ready");
        Ok(repository)
    }

    /// Runs `f` on a fresh connection, then closes the connection.
    async fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let busy_timeout = self.busy_timeout;

        let conn = Connection::open(&self.path)
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, busy_timeout))?;

        let result = conn
            .call(move |conn| {
                conn.busy_timeout(busy_timeout).map_err(wrap_err)?;
                f(conn)
            })
            .await;

        if let Err(err) = conn.close().await {
            tracing::warn!(error = %err, "Failed to close SQLite connection");
        }

        result.map_err(|e| map_tokio_rusqlite_error(e, busy_timeout))
    }
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(schema::SELECT_ALL_USERS).map_err(wrap_err)?;
            let rows = stmt.query_map([], row_to_user).map_err(wrap_err)?;

            let mut users = Vec::new();
            for row_result in rows {
                users.push(row_result.map_err(wrap_err)?);
            }
            Ok(users)
        })
        .await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let name = user.name.clone();
        let email = user.email.clone();

        let id = self
            .with_connection(move |conn| {
                conn.execute(schema::INSERT_USER, rusqlite::params![name, email])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        tracing::debug!(user_id = id, "User inserted");
        Ok(user.clone().with_id(id))
    }
}
