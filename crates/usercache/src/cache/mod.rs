//! Cache backend implementations.
//!
//! This module provides concrete implementations of the [`Cache`] trait
//! defined in `usercache_core::cache`. The backend is chosen at startup from
//! configuration; the Redis backend is compiled in with the `redis` feature.
//!
//! - `memory`: In-process LRU cache, always available
//! - `redis`: Redis cache using the redis crate
//!
//! [`Cache`]: usercache_core::cache::Cache

pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;
