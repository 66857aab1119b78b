//! Application configuration module
//!
//! Provides the configuration types for the catalog client. Values are
//! resolved in three layers: built-in defaults, an optional TOML file and
//! finally environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default backend base URL, including the `/api` prefix
pub const DEFAULT_SERVER_URL: &str = "https://backendcafe.up.railway.app/api";

/// Header the backend reads the session token from
pub const DEFAULT_TOKEN_HEADER: &str = "x-token";

/// Fixed page size used when listing products
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Directory name used under the platform config/data directories
pub const APP_DIR_NAME: &str = "cafe-catalog";

/// Environment variable overriding the server URL
pub const ENV_SERVER_URL: &str = "CAFE_API_URL";

/// Environment variable overriding the token file location
pub const ENV_TOKEN_PATH: &str = "CAFE_TOKEN_PATH";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub server_url: String,
    /// Name of the request header carrying the session token
    pub token_header: String,
    /// Maximum number of products fetched per listing
    pub page_size: u32,
    /// Where the session token is persisted
    pub token_path: PathBuf,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            token_header: DEFAULT_TOKEN_HEADER.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            token_path: default_token_path(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Resolve configuration from the default file location and the environment.
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();
        if let Some(path) = default_config_path() {
            if path.exists() {
                builder = builder.merge_file(&path)?;
            }
        }
        builder.merge_env().build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.server_url.clone()));
        }
        if self.token_header.trim().is_empty() {
            return Err(ConfigError::MissingValue("token_header"));
        }
        if self.page_size == 0 {
            return Err(ConfigError::MissingValue("page_size"));
        }
        Ok(())
    }
}

/// On-disk shape of `config.toml`; every key is optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    server_url: Option<String>,
    token_header: Option<String>,
    page_size: Option<u32>,
    token_path: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    token_header: Option<String>,
    page_size: Option<u32>,
    token_path: Option<PathBuf>,
    request_timeout: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    pub fn token_header(mut self, header: impl Into<String>) -> Self {
        self.token_header = Some(header.into());
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set where the session token file lives
    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Layer values from a TOML file over what the builder already holds
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        self.merge_toml(&raw)
    }

    /// Layer values from a TOML document over what the builder already holds
    pub fn merge_toml(mut self, raw: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(raw)?;
        if file.server_url.is_some() {
            self.server_url = file.server_url;
        }
        if file.token_header.is_some() {
            self.token_header = file.token_header;
        }
        if file.page_size.is_some() {
            self.page_size = file.page_size;
        }
        if file.token_path.is_some() {
            self.token_path = file.token_path;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }

    /// Layer `CAFE_API_URL` and `CAFE_TOKEN_PATH` over what the builder already holds
    pub fn merge_env(mut self) -> Self {
        if let Ok(url) = std::env::var(ENV_SERVER_URL) {
            if !url.trim().is_empty() {
                self.server_url = Some(url);
            }
        }
        if let Ok(path) = std::env::var(ENV_TOKEN_PATH) {
            if !path.trim().is_empty() {
                self.token_path = Some(PathBuf::from(path));
            }
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            server_url: self
                .server_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.server_url),
            token_header: self.token_header.unwrap_or(defaults.token_header),
            page_size: self.page_size.unwrap_or(defaults.page_size),
            token_path: self.token_path.unwrap_or(defaults.token_path),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };
        config.validate()?;
        Ok(config)
    }
}

/// `<data_dir>/cafe-catalog/token`, falling back to the temp dir
pub fn default_token_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    path.push(APP_DIR_NAME);
    path.push("token");
    path
}

/// `<config_dir>/cafe-catalog/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR_NAME);
        path.push("config.toml");
        path
    })
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert_eq!(config.token_header, "x-token");
        assert_eq!(config.page_size, 50);
        assert!(config.token_path.ends_with("cafe-catalog/token"));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::builder()
            .server_url("http://localhost:8080/api/")
            .build()
            .unwrap();
        assert_eq!(config.server_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = AppConfig::builder().server_url("ftp://nope").build();
        assert_matches!(result, Err(ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = AppConfig::builder().page_size(0).build();
        assert_matches!(result, Err(ConfigError::MissingValue("page_size")));
    }

    #[test]
    fn test_merge_toml_overrides_only_present_keys() {
        let config = AppConfig::builder()
            .page_size(10)
            .merge_toml(
                r#"
                server_url = "http://127.0.0.1:9000/api"
                request_timeout_secs = 5
                "#,
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.server_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_merge_toml_rejects_garbage() {
        let result = AppConfig::builder().merge_toml("server_url = [");
        assert_matches!(result, Err(ConfigError::Parse(_)));
    }

    #[test]
    fn test_merge_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "token_header = \"x-session\"\n").unwrap();

        let config = AppConfig::builder().merge_file(&path).unwrap().build().unwrap();
        assert_eq!(config.token_header, "x-session");
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        std::env::set_var(ENV_SERVER_URL, "http://env.example/api");
        std::env::set_var(ENV_TOKEN_PATH, "/tmp/cafe-test-token");

        let config = AppConfig::builder()
            .merge_toml("server_url = \"http://file.example/api\"")
            .unwrap()
            .merge_env()
            .build()
            .unwrap();

        std::env::remove_var(ENV_SERVER_URL);
        std::env::remove_var(ENV_TOKEN_PATH);

        assert_eq!(config.server_url, "http://env.example/api");
        assert_eq!(config.token_path, PathBuf::from("/tmp/cafe-test-token"));
    }
}
