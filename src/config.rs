use std::time::Duration;

use crate::common::ConfigError;

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment-driven configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub store_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let store_timeout = std::env::var("PRESSDESK_STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_STORE_TIMEOUT);

        Ok(Self {
            database_url,
            store_timeout,
        })
    }
}
