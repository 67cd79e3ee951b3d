//! Application state with repository-based storage.
//!
//! Wires the SQLite store and the configured cache into a single
//! `UserRepository` trait object.

use std::sync::Arc;

use usercache_core::cache::OptionalCache;
use usercache_core::storage::UserRepository;

use crate::cache::MemoryCache;
use crate::config::{CacheBackend, Config};
use crate::storage::{CachedUserRepository, SqliteRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// User repository (cached, wraps underlying storage).
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Creates AppState with SQLite storage and the configured cache.
    ///
    /// Only an unusable store is fatal. A cache that cannot be built leaves
    /// the repository running without one.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let sqlite_repo = Arc::new(
            SqliteRepository::new(&config.sqlite_path, config.operation_timeout()).await?,
        );
        let cache = Arc::new(build_cache(config).await);

        tracing::info!(
            path = %config.sqlite_path,
            cache = ?config.cache_backend,
            cache_configured = cache.is_configured(),
            ttl = ?config.cache_ttl(),
            "User repository ready"
        );

        let users = Arc::new(CachedUserRepository::new(
            sqlite_repo,
            cache,
            config.cache_ttl(),
            config.operation_timeout(),
        ));

        Ok(Self { users })
    }
}

async fn build_cache(config: &Config) -> OptionalCache {
    match config.cache_backend {
        CacheBackend::None => OptionalCache::Unconfigured,
        CacheBackend::Memory => match MemoryCache::new(config.cache_max_entries) {
            Ok(cache) => OptionalCache::configured(cache),
            Err(err) => {
                tracing::warn!(error = %err, "Memory cache unavailable, running without cache");
                OptionalCache::Unconfigured
            }
        },
        CacheBackend::Redis => connect_redis(config).await,
    }
}

#[cfg(feature = "redis")]
async fn connect_redis(config: &Config) -> OptionalCache {
    use crate::cache::RedisCache;

    match RedisCache::new(&config.redis_url, config.operation_timeout()).await {
        Ok(cache) => OptionalCache::configured(cache),
        Err(err) => {
            tracing::warn!(error = %err, "Redis unreachable, running without cache");
            OptionalCache::Unconfigured
        }
    }
}

#[cfg(not(feature = "redis"))]
async fn connect_redis(_config: &Config) -> OptionalCache {
    tracing::warn!("Built without the 'redis' feature, running without cache");
    OptionalCache::Unconfigured
}
