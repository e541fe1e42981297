//! Application configuration loaded from environment variables.

use serde::Deserialize;
use url::Url;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === API Server ===
    /// Base URL of the user directory API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    // === HTTP Client ===
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Max idle connections kept per host.
    #[serde(default = "default_http_pool_size")]
    pub http_pool_size: usize,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_http_timeout_ms() -> u64 {
    10_000
}

fn default_http_pool_size() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::error::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() {
            return Err("API_BASE_URL must not be empty".to_string());
        }

        let url = Url::parse(&self.api_base_url)
            .map_err(|e| format!("API_BASE_URL is not a valid URL: {}", e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err("API_BASE_URL must use http:// or https://".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than zero".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            http_timeout_ms: default_http_timeout_ms(),
            http_pool_size: default_http_pool_size(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
