//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub settings_path: String,
    pub catalog_path: String,
    pub asset_base_url: Option<String>,
    pub rate_limit_per_minute: u32,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let settings_path = env::var("SETTINGS_PATH")
            .map_err(|_| anyhow::anyhow!("SETTINGS_PATH environment variable is required"))?;

        let catalog_path = env::var("CATALOG_PATH")
            .map_err(|_| anyhow::anyhow!("CATALOG_PATH environment variable is required"))?;

        let rate_limit_per_minute = env::var("RATE_LIMIT_PER_MINUTE")
            .unwrap_or_else(|_| "600".to_string())
            .parse()?;

        Ok(Self {
            port,
            settings_path,
            catalog_path,
            asset_base_url: non_empty_var("ASSET_BASE_URL"),
            rate_limit_per_minute,
            otlp_endpoint: non_empty_var("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
