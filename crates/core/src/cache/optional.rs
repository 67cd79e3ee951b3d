//! Cache capability that may not be configured.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::{Cache, Result};

/// A cache that is either backed by a real implementation or absent.
///
/// `Unconfigured` behaves as a cache that never holds anything: reads miss and
/// writes succeed without effect. Callers therefore treat "no cache" exactly
/// like a cold cache.
#[derive(Clone, Default)]
pub enum OptionalCache {
    Configured(Arc<dyn Cache>),
    #[default]
    Unconfigured,
}

impl OptionalCache {
    /// Wraps a concrete cache implementation.
    pub fn configured<C: Cache + 'static>(cache: C) -> Self {
        Self::Configured(Arc::new(cache))
    }

    /// Returns true when a backing cache is present.
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }
}

impl std::fmt::Debug for OptionalCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configured(_) => f.write_str("OptionalCache::Configured"),
            Self::Unconfigured => f.write_str("OptionalCache::Unconfigured"),
        }
    }
}

#[async_trait]
impl Cache for OptionalCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self {
            Self::Configured(cache) => cache.get(key).await,
            Self::Unconfigured => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        match self {
            Self::Configured(cache) => cache.set(key, value, ttl).await,
            Self::Unconfigured => Ok(()),
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        match self {
            Self::Configured(cache) => cache.delete(key).await,
            Self::Unconfigured => Ok(()),
        }
    }
}
