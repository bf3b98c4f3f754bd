//! Database library providing a MongoDB connector and repository utilities
//!
//! This library provides a unified interface for connecting to MongoDB and a
//! generic repository over UUID-keyed document types.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Examples
//!
//! ## Connecting
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//! ```
//!
//! ## Generic repository
//!
//! ```ignore
//! use database::mongodb::{MongoRepository, UuidDocument};
//!
//! impl UuidDocument for Record {
//!     const COLLECTION: &'static str = "records";
//!     fn id(&self) -> uuid::Uuid { self.id }
//! }
//!
//! let repo = MongoRepository::<Record>::new(&db);
//! let all = repo.find_all().await?;
//! ```

// Always available modules
pub mod common;

// Database-specific modules (conditional based on features)
#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};

#[cfg(feature = "mongodb")]
pub use mongodb::{MongoRepository, UuidDocument};
