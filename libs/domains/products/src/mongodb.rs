//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use database::mongodb::{MongoRepository, UuidDocument};
use mongodb::Database;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

impl UuidDocument for Product {
    const COLLECTION: &'static str = "productos";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    repo: MongoRepository<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        Self {
            repo: MongoRepository::new(db),
        }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            repo: MongoRepository::with_collection(db, collection_name),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.repo.insert(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.repo.find_all().await?;
        Ok(products)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        // First, get the existing product
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        // Apply the replacement
        let mut updated = existing;
        updated.apply_update(input);

        self.repo.replace(&updated).await?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<Product> {
        let deleted = self
            .repo
            .delete_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(deleted)
    }
}
