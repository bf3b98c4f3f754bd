use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product with a freshly assigned identifier
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// List every product, in natural storage order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Replace the fields of an existing product
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product>;

    /// Remove a product, returning the removed document
    async fn delete(&self, id: Uuid) -> ProductResult<Product>;
}
