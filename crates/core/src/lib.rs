//! Functional core for usercache.
//!
//! Pure domain types, the cache and storage contracts, and the pure helpers
//! (validation, cache keys, snapshot serialization, error mapping) shared by
//! every backend. Nothing in this crate performs I/O.

pub mod cache;
pub mod storage;
pub mod users;
