//! Storage backend implementations.
//!
//! This module provides the concrete store behind the `UserRepository`
//! trait defined in `usercache_core::storage`, plus the caching decorator
//! that wraps it.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite store using `rusqlite` and `tokio-rusqlite`
//!
//! The store is the source of truth, so a build without it is rejected.

#[cfg(not(feature = "sqlite"))]
compile_error!(
    "No storage backend selected. Enable the 'sqlite' feature. \
    Example: cargo build -p usercache --features sqlite"
);

pub mod cached;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use cached::CachedUserRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
