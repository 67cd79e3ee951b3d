//! Cached repository decorator.
//!
//! This module provides a decorator that wraps a [`UserRepository`] with
//! caching behavior. The decorator implements the cache-aside pattern:
//!
//! - **Reads**: Check cache first, on miss fetch from repository and populate cache
//! - **Writes**: Persist to repository, then invalidate the cached snapshot
//!
//! The store stays the source of truth. Cache failures are logged and
//! swallowed, store failures always reach the caller.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("usercache.db", timeout).await?);
//! let cache = Arc::new(OptionalCache::configured(MemoryCache::new(1_000)?));
//!
//! let users = CachedUserRepository::new(repo, cache, USERS_CACHE_TTL, timeout);
//! ```
//!
//! [`UserRepository`]: usercache_core::storage::UserRepository

mod user;

pub use user::CachedUserRepository;
