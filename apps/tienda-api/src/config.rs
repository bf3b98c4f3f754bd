use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// REST port is fixed; only the MongoDB connection comes from the environment.
const PORT: u16 = 3000;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::on_port(PORT);

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_is_fixed() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("PORT", Some("9999")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 3000);
            },
        );
    }

    #[test]
    fn test_missing_connection_string_fails() {
        temp_env::with_vars(
            [("MONGODB_URL", None::<&str>), ("MONGO_URL", None::<&str>)],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
