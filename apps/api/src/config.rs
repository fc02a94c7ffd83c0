use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, FromEnv};

use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Default page size of the aggregated project listing
    pub listing_page_size: u64,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        let listing_page_size = env_or_default("LISTING_PAGE_SIZE", "3")
            .parse()
            .map_err(|e| eyre::eyre!("LISTING_PAGE_SIZE must be a positive integer: {e}"))?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            listing_page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/pms")),
                ("LISTING_PAGE_SIZE", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.listing_page_size, 3);
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn test_config_rejects_bad_page_size() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/pms")),
                ("LISTING_PAGE_SIZE", Some("lots")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
