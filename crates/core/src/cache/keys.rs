use std::time::Duration;

/// Cache key holding the serialized snapshot of every user.
pub const USERS_ALL_KEY: &str = "users:all";

/// Default lifetime of the users snapshot in the cache.
pub const USERS_CACHE_TTL: Duration = Duration::from_secs(60);
