// web_app/api/config.rs - Inventory API settings read from the environment

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/products";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base path every endpoint is appended to, without a trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read `INVENTORY_API_URL` and `INVENTORY_API_TIMEOUT_SECS`, loading a
    /// `.env` file first if there is one.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let mut config = env::var("INVENTORY_API_URL")
            .map(Self::new)
            .unwrap_or_default();

        match env::var("INVENTORY_API_TIMEOUT_SECS").map(|v| v.parse::<u64>()) {
            Ok(Ok(secs)) => config.timeout = Duration::from_secs(secs),
            Ok(Err(e)) => tracing::warn!("Ignoring INVENTORY_API_TIMEOUT_SECS: {}", e),
            Err(_) => {}
        }
        config
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://api.local/products/");
        assert_eq!(config.endpoint("/getAll"), "http://api.local/products/getAll");
    }

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
