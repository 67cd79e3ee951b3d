//! Pure functions for serializing the users snapshot to and from cache bytes.
//!
//! Values are stored as a JSON array of `{"id", "name", "email"}` objects, so
//! a cached snapshot can be inspected with any Redis client.

use thiserror::Error;

use crate::users::User;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

impl From<SerializationError> for super::CacheError {
    fn from(err: SerializationError) -> Self {
        super::CacheError::Serialization(err.to_string())
    }
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a users snapshot to JSON bytes, preserving order.
pub fn serialize_users(users: &[User]) -> Result<Vec<u8>> {
    serde_json::to_vec(users).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a users snapshot.
pub fn deserialize_users(bytes: &[u8]) -> Result<Vec<User>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice_and_bob() -> Vec<User> {
        vec![
            User::new(1, "Alice", "a@x.com"),
            User::new(2, "Bob", "b@x.com"),
        ]
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let users = alice_and_bob();

        let bytes = serialize_users(&users).expect("serialize should succeed");
        let deserialized = deserialize_users(&bytes).expect("deserialize should succeed");

        assert_eq!(users, deserialized);
    }

    #[test]
    fn test_empty_snapshot() {
        let bytes = serialize_users(&[]).unwrap();

        assert_eq!(bytes, b"[]");
        assert!(deserialize_users(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_reads_plain_json_rows() {
        let bytes = br#"[{"id": 1, "name": "Alice", "email": "a@x.com"}]"#;

        let users = deserialize_users(bytes).unwrap();

        assert_eq!(users, vec![User::new(1, "Alice", "a@x.com")]);
    }

    #[test]
    fn test_invalid_json_fails() {
        let result = deserialize_users(b"not json");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_wrong_shape_fails() {
        let result = deserialize_users(br#"{"id": 1}"#);

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_converts_into_cache_error() {
        let err: crate::cache::CacheError =
            SerializationError::DeserializeFailed("eof".to_string()).into();

        assert_eq!(
            err,
            crate::cache::CacheError::Serialization("Failed to deserialize: eof".to_string())
        );
    }
}
