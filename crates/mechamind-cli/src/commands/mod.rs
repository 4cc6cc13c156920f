pub mod feed;
pub mod server;

use std::fmt::Display;

use log::error;
use mechamind_core::{ConfigError, StoreClient, StoreConfig};

/// Build the store client from `SUPABASE_URL` / `SUPABASE_ANON_KEY`.
/// Missing configuration is fatal: report and exit 1.
pub fn make_store() -> StoreClient {
    build_store(StoreConfig::from_env()).unwrap_or_else(|e| fatal(&e))
}

fn build_store(config: Result<StoreConfig, ConfigError>) -> Result<StoreClient, ConfigError> {
    config.and_then(StoreClient::new)
}

/// Multi-threaded tokio runtime for the long-running commands.
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().unwrap_or_else(|e| fatal(&e))
}

/// Log, print to stderr and exit with status 1.
pub fn fatal(err: &dyn Display) -> ! {
    error!("{err}");
    eprintln!("Error: {err}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_store_passes_config_error_through() {
        let err = build_store(Err(ConfigError::Missing("SUPABASE_URL"))).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SUPABASE_URL")));
    }

    #[test]
    fn test_build_store_from_valid_config() {
        let config = StoreConfig::new("https://demo.supabase.co", "anon-key");
        let store = build_store(config).unwrap();
        assert_eq!(
            store.table_url().as_str(),
            "https://demo.supabase.co/rest/v1/vehicle_data"
        );
    }
}
