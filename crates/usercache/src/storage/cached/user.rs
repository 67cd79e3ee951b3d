//! Cached user repository decorator.
//!
//! Wraps a `UserRepository` implementation with the cache-aside pattern over
//! a single snapshot key, `users:all`.
//!
//! # Staleness
//!
//! A snapshot lives at most `ttl` and is deleted after every successful
//! write. One window remains: a read that queried the store before a write
//! committed can store its older snapshot after that write deleted the key.
//! The older snapshot is then served until it expires. This is bounded by the
//! TTL and is accepted.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use usercache_core::cache::{
    deserialize_users, serialize_users, Cache, CacheError, Result as CacheResult, USERS_ALL_KEY,
};
use usercache_core::storage::{RepositoryError, Result, UserRepository};
use usercache_core::users::{validate_new_user, NewUser, User};

/// Logs and discards a failed cache call.
///
/// Cache failures end here: the caller gets `None` and carries on with the
/// store alone.
fn absorb<T>(operation: &'static str, result: CacheResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(
                operation,
                key = USERS_ALL_KEY,
                error = %err,
                "Cache call failed, continuing without cache"
            );
            None
        }
    }
}

/// Cached user repository decorator.
///
/// Implements the cache-aside pattern:
/// - **Reads**: Check cache first, on miss fetch from repository and populate cache
/// - **Writes**: Validate, persist to repository, invalidate cache
///
/// Every repository and cache call is bounded by `timeout`. The decorator
/// holds no mutable state of its own, so it can be shared freely across
/// concurrent requests.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedUserRepository<R, C>
where
    R: UserRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
    timeout: Duration,
}

impl<R, C> CachedUserRepository<R, C>
where
    R: UserRepository,
    C: Cache,
{
    /// Creates a new cached user repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live for the cached snapshot
    /// * `timeout` - Upper bound for each repository and cache call
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration, timeout: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
            timeout,
        }
    }

    async fn store_call<T>(&self, call: impl Future<Output = Result<T>>) -> Result<T> {
        tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or(Err(RepositoryError::Timeout(self.timeout)))
    }

    async fn cache_call<T>(&self, call: impl Future<Output = CacheResult<T>>) -> CacheResult<T> {
        tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or(Err(CacheError::Timeout(self.timeout)))
    }

    /// Reads the cached snapshot. Any failure reads as a miss.
    async fn read_snapshot(&self) -> Option<Vec<User>> {
        let bytes = absorb("get", self.cache_call(self.cache.get(USERS_ALL_KEY)).await)??;

        match deserialize_users(&bytes) {
            Ok(users) => Some(users),
            Err(err) => {
                // Treated as a miss; the store result overwrites it
                tracing::warn!(key = USERS_ALL_KEY, error = %err, "Cached snapshot is unreadable");
                None
            }
        }
    }

    /// Stores a fresh snapshot, best effort.
    async fn write_snapshot(&self, users: &[User]) {
        let bytes = match serialize_users(users) {
            Ok(bytes) => bytes,
            Err(err) => {
                absorb::<()>("serialize", Err(err.into()));
                return;
            }
        };

        let written = absorb(
            "set",
            self.cache_call(self.cache.set(USERS_ALL_KEY, &bytes, Some(self.ttl)))
                .await,
        );
        if written.is_some() {
            tracing::trace!(users = users.len(), ttl = ?self.ttl, "Users snapshot cached");
        }
    }

    /// Removes the cached snapshot, best effort.
    async fn invalidate(&self) {
        let deleted = absorb(
            "delete",
            self.cache_call(self.cache.delete(USERS_ALL_KEY)).await,
        );
        if deleted.is_some() {
            tracing::trace!(key = USERS_ALL_KEY, "Users snapshot invalidated");
        }
    }
}

#[async_trait]
impl<R, C> UserRepository for CachedUserRepository<R, C>
where
    R: UserRepository + 'static,
    C: Cache + 'static,
{
    async fn list_users(&self) -> Result<Vec<User>> {
        if let Some(users) = self.read_snapshot().await {
            tracing::trace!(users = users.len(), "Cache hit for users");
            return Ok(users);
        }

        tracing::debug!("Cache miss for users");
        let users = self.store_call(self.repository.list_users()).await?;

        self.write_snapshot(&users).await;

        Ok(users)
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        validate_new_user(user)?;

        // 1. Persist to storage; nothing touches the cache unless this commits
        let created = self.store_call(self.repository.create_user(user)).await?;

        // 2. Invalidate cache (will be repopulated on next read)
        self.invalidate().await;

        tracing::debug!(user_id = created.id, "User created");
        Ok(created)
    }
}
