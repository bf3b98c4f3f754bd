//! User Service - orchestration layer
//!
//! No validation happens here: payload fields pass through to storage
//! as-is. The service owns identifier parsing for the path-addressed
//! operations.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// User service sitting between the HTTP handlers and the repository
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user
    #[instrument(skip(self, input))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        self.repository.create(input).await
    }

    /// List every user
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Replace an existing user's fields
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<User> {
        let id = parse_id(id)?;
        self.repository.update(id, input).await
    }

    /// Delete a user, returning the removed document
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<User> {
        let id = parse_id(id)?;
        self.repository.delete(id).await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Parse a raw path identifier.
///
/// Malformed identifiers map to [`UserError::InvalidId`], which renders as
/// a 500 like every other storage fault.
fn parse_id(id: &str) -> UserResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| UserError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_uuid() {
        let id = Uuid::now_v7();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = parse_id("123").unwrap_err();
        assert!(matches!(err, UserError::InvalidId(_)));
    }
}
