use async_trait::async_trait;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User};

/// Repository trait for User persistence
///
/// This trait defines the data access interface for users.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user with a freshly assigned identifier
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// List every user, in natural storage order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Replace the fields of an existing user
    async fn update(&self, id: Uuid, input: UpdateUser) -> UserResult<User>;

    /// Remove a user, returning the removed document
    async fn delete(&self, id: Uuid) -> UserResult<User>;
}
