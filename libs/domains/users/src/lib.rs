//! Users Domain
//!
//! This module provides a complete domain implementation for managing users
//! using MongoDB. The contract mirrors the products domain with the user
//! record shape.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     mongodb::MongoUserRepository,
//!     service::UserService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//!
//! let repository = MongoUserRepository::new(&db);
//! let service = UserService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, DeletedUser, UpdateUser, User};
pub use mongodb::MongoUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
