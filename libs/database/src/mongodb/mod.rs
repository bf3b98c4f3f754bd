pub mod config;
pub mod connector;
pub mod health;
pub mod repository;

pub use config::MongoConfig;
pub use connector::{connect, connect_from_config, MongoError};
pub use health::{check_health, check_health_detailed, HealthStatus};
pub use repository::{MongoRepository, UuidDocument};
