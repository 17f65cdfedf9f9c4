// Kept in its own binary: these tests mutate process-wide env vars,
// which must not race the sqlx::test harness's DATABASE_URL read.

#[cfg(test)]
pub mod config_tests {
    use std::time::Duration;

    use pressdesk::common::ConfigError;
    use pressdesk::config::{Config, DEFAULT_STORE_TIMEOUT};

    // One test, sequential steps: parallel #[test] fns sharing env
    // vars would race each other.
    #[test]
    fn test_config_reads_env() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/pressdesk_test");
        std::env::set_var("PRESSDESK_STORE_TIMEOUT_SECS", "9");

        let config = Config::from_env().expect("Failed config load");
        assert_eq!(config.database_url, "postgres://localhost/pressdesk_test");
        assert_eq!(config.store_timeout, Duration::from_secs(9));

        std::env::remove_var("PRESSDESK_STORE_TIMEOUT_SECS");
        let config = Config::from_env().expect("Failed config load");
        assert_eq!(config.store_timeout, DEFAULT_STORE_TIMEOUT);

        std::env::set_var("PRESSDESK_STORE_TIMEOUT_SECS", "not a number");
        let config = Config::from_env().expect("Failed config load");
        assert_eq!(config.store_timeout, DEFAULT_STORE_TIMEOUT);
        std::env::remove_var("PRESSDESK_STORE_TIMEOUT_SECS");

        std::env::remove_var("DATABASE_URL");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));
    }

    #[test]
    fn test_logging_init_is_repeatable() {
        pressdesk::logging::init();
        pressdesk::logging::init();
    }
}
