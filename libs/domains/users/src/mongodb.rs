//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use database::mongodb::{MongoRepository, UuidDocument};
use mongodb::Database;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

impl UuidDocument for User {
    const COLLECTION: &'static str = "usuarios";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    repo: MongoRepository<User>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository
    pub fn new(db: &Database) -> Self {
        Self {
            repo: MongoRepository::new(db),
        }
    }

    /// Create a new MongoUserRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            repo: MongoRepository::with_collection(db, collection_name),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let user = User::new(input);

        self.repo.insert(&user).await?;

        tracing::info!(user_id = %user.id, "User created successfully");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> UserResult<Vec<User>> {
        let users = self.repo.find_all().await?;
        Ok(users)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        // First, get the existing user
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        // Apply the replacement
        let mut updated = existing;
        updated.apply_update(input);

        self.repo.replace(&updated).await?;

        tracing::info!(user_id = %id, "User updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> UserResult<User> {
        let deleted = self
            .repo
            .delete_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        tracing::info!(user_id = %id, "User deleted successfully");
        Ok(deleted)
    }
}
