//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of [`UserRepository`]
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async
//! wrapping. A connection is opened for every operation and closed before the
//! operation returns.
//!
//! [`UserRepository`]: usercache_core::storage::UserRepository

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
