//! In-memory cache implementation with LRU eviction.
//!
//! Provides a thread-safe in-memory cache with TTL support using
//! tokio synchronization primitives and LRU eviction policy.
//! Expired entries read as misses and are dropped on access, matching the
//! way Redis reports an expired key as absent.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;

use usercache_core::cache::{Cache, CacheError, Result};

/// A single cache entry with optional expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<Mutex<LruCache>>` for concurrent access.
/// Cloning is cheap and every clone shares the same store.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<Mutex<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries` keys.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::OperationFailed` if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries).ok_or_else(|| {
            CacheError::OperationFailed("max_entries must be greater than zero".to_string())
        })?;
        Ok(Self {
            store: Arc::new(Mutex::new(LruCache::new(capacity))),
        })
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.lock().await;

        let expired = match store.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            store.pop(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.lock().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.lock().await;
        store.pop(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MAX_ENTRIES: usize = 100;

    fn test_cache() -> MemoryCache {
        MemoryCache::new(TEST_MAX_ENTRIES).unwrap()
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(matches!(
            MemoryCache::new(0),
            Err(CacheError::OperationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = test_cache();

        cache.set("users:all", b"[]", None).await.unwrap();

        assert_eq!(cache.get("users:all").await.unwrap(), Some(b"[]".to_vec()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = test_cache();

        assert_eq!(cache.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = test_cache();
        let key = "test:delete";

        cache.set(key, b"value", None).await.unwrap();
        assert!(cache.get(key).await.unwrap().is_some());

        cache.delete(key).await.unwrap();
        assert!(cache.get(key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_key_succeeds() {
        let cache = test_cache();

        assert!(cache.delete("never-set").await.is_ok());
    }

    #[tokio::test]
    async fn test_ttl_expiration() {
        let cache = test_cache();
        let key = "test:ttl";

        cache
            .set(key, b"short-lived", Some(Duration::from_millis(50)))
            .await
            .unwrap();

        // Should exist immediately
        assert!(cache.get(key).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.get(key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value_and_ttl() {
        let cache = test_cache();
        let key = "test:overwrite";

        cache
            .set(key, b"initial", Some(Duration::from_millis(20)))
            .await
            .unwrap();
        cache.set(key, b"updated", None).await.unwrap();

        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(cache.get(key).await.unwrap(), Some(b"updated".to_vec()));
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let cache = MemoryCache::new(2).unwrap();

        cache.set("a", b"1", None).await.unwrap();
        cache.set("b", b"2", None).await.unwrap();
        // Touch "a" so "b" becomes least recently used
        cache.get("a").await.unwrap();
        cache.set("c", b"3", None).await.unwrap();

        assert!(cache.get("a").await.unwrap().is_some());
        assert!(cache.get("b").await.unwrap().is_none());
        assert!(cache.get("c").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let cache = test_cache();
        let clone = cache.clone();

        cache.set("shared", b"v", None).await.unwrap();

        assert_eq!(clone.get("shared").await.unwrap(), Some(b"v".to_vec()));
    }
}
