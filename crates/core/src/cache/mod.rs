mod error;
mod keys;
mod optional;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{USERS_ALL_KEY, USERS_CACHE_TTL};
pub use optional::OptionalCache;
pub use serialization::{deserialize_users, serialize_users, SerializationError};
pub use traits::Cache;
