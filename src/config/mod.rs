//! Configuration module for the creator backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for API authentication (required in production)
    pub api_psk: Option<String>,
    /// Path to the JSON file holding the persisted preference subset
    pub state_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Artificial latency for generation endpoints, in milliseconds
    pub generation_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_psk = env::var("CREATOR_API_PSK").ok();

        let state_path = env::var("CREATOR_STATE_PATH")
            .unwrap_or_else(|_| "./data/state.json".to_string())
            .into();

        let bind_addr = env::var("CREATOR_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid CREATOR_BIND_ADDR format");

        let log_level = env::var("CREATOR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let generation_delay_ms = env::var("CREATOR_GENERATION_DELAY_MS")
            .unwrap_or_else(|_| "500".to_string())
            .parse()
            .expect("Invalid CREATOR_GENERATION_DELAY_MS format");

        Self {
            api_psk,
            state_path,
            bind_addr,
            log_level,
            generation_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("CREATOR_API_PSK");
        env::remove_var("CREATOR_STATE_PATH");
        env::remove_var("CREATOR_BIND_ADDR");
        env::remove_var("CREATOR_LOG_LEVEL");
        env::remove_var("CREATOR_GENERATION_DELAY_MS");

        let config = Config::from_env();

        assert!(config.api_psk.is_none());
        assert_eq!(config.state_path, PathBuf::from("./data/state.json"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.generation_delay_ms, 500);
    }
}
