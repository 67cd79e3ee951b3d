//! Redis cache backend implementation.
//!
//! Provides a shared cache using Redis so every process sees the same users
//! snapshot. Connections are managed by a `ConnectionManager`.

mod cache;
mod error;

pub use cache::RedisCache;
