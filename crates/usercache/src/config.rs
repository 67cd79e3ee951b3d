use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

use usercache_core::cache::USERS_CACHE_TTL;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid CACHE_BACKEND '{0}': expected 'redis', 'memory' or 'none'")]
    InvalidCacheBackend(String),
}

/// Which cache sits in front of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    /// No cache; every read goes to the store.
    None,
    /// Process-local LRU cache.
    Memory,
    /// Shared Redis cache.
    Redis,
}

impl FromStr for CacheBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            _ => Err(ConfigError::InvalidCacheBackend(value.to_string())),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "usercache.db")
    pub sqlite_path: String,
    /// Selected cache backend
    pub cache_backend: CacheBackend,
    /// Redis connection URL, only used with the Redis backend
    pub redis_url: String,
    /// Snapshot TTL in seconds (default: 60)
    pub cache_ttl_seconds: u64,
    /// Maximum number of memory cache entries (default: 1,000)
    pub cache_max_entries: usize,
    /// Upper bound for each store and cache call in milliseconds (default: 2,000)
    pub operation_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "usercache.db")
    /// - `CACHE_BACKEND` - `redis`, `memory` or `none` (default: `redis` when
    ///   `REDIS_HOST` or `REDIS_URL` is set, otherwise `none`)
    /// - `REDIS_URL` - Redis connection URL (default: built from host and port)
    /// - `REDIS_HOST` - Redis host (default: "localhost")
    /// - `REDIS_PORT` - Redis port (default: 6379)
    /// - `CACHE_TTL_SECONDS` - Snapshot TTL in seconds (default: 60)
    /// - `CACHE_MAX_ENTRIES` - Maximum memory cache entries (default: 1,000)
    /// - `OPERATION_TIMEOUT_MS` - Per-call timeout (default: 2,000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let redis_host = lookup("REDIS_HOST");
        let explicit_url = lookup("REDIS_URL");

        let cache_backend = match lookup("CACHE_BACKEND") {
            Some(value) => value.parse()?,
            None if redis_host.is_some() || explicit_url.is_some() => CacheBackend::Redis,
            None => CacheBackend::None,
        };

        let redis_url = explicit_url.unwrap_or_else(|| {
            let port: u16 = lookup("REDIS_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(6379);
            let host = redis_host.unwrap_or_else(|| "localhost".to_string());
            format!("redis://{host}:{port}")
        });

        Ok(Self {
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "usercache.db".to_string()),
            cache_backend,
            redis_url,
            cache_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(USERS_CACHE_TTL.as_secs()),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
            operation_timeout_ms: lookup("OPERATION_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(2_000),
        })
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the per-call timeout as a Duration.
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }
}
