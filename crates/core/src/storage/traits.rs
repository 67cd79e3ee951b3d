use async_trait::async_trait;

use crate::users::{NewUser, User};

use super::Result;

/// Repository for user operations.
///
/// Implemented both by durable stores and by the caching decorator that
/// wraps them, so callers never know which one they hold.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists every user in the store's native order.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Creates a user and returns it with its store-assigned ID.
    async fn create_user(&self, user: &NewUser) -> Result<User>;
}
