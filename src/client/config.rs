use std::path::Path;
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let app = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unusable configuration, using defaults: {}", e);
            AppConfig::default()
        });
        Self { app }
    }
}

impl Config {
    /// Create a new configuration from the config file and environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }

    /// Header the session token is sent in
    pub fn token_header(&self) -> &str {
        &self.app.token_header
    }

    pub fn page_size(&self) -> u32 {
        self.app.page_size
    }

    pub fn token_path(&self) -> &Path {
        &self.app.token_path
    }

    pub fn request_timeout(&self) -> Duration {
        self.app.request_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config() -> Config {
        Config::with_builder(AppConfig::builder().server_url("http://127.0.0.1:3000/api")).unwrap()
    }

    #[test]
    fn test_api_url() {
        let config = local_config();
        let url = config.api_url("/auth/login");
        assert_eq!(url, "http://127.0.0.1:3000/api/auth/login");
    }

    #[test]
    fn test_accessors_follow_builder() {
        let config = Config::with_builder(
            AppConfig::builder()
                .server_url("http://127.0.0.1:3000/api")
                .page_size(20)
                .token_header("x-session"),
        )
        .unwrap();
        assert_eq!(config.page_size(), 20);
        assert_eq!(config.token_header(), "x-session");
    }

    #[test]
    fn test_with_builder_rejects_bad_url() {
        assert!(Config::with_builder(AppConfig::builder().server_url("localhost")).is_err());
    }
}
