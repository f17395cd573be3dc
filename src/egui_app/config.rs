use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::shared::config::{AppConfig, ConfigError};

/// Remote configuration endpoint
pub const APP_CONFIG_PATH: &str = "/api/config";

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Default tracing filter for the client
const DEFAULT_LOG_FILTER: &str = "info";

/// Optional on-disk overrides, `client.toml` in the platform config dir.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    server_url: Option<String>,
    storage_path: Option<PathBuf>,
    log_filter: Option<String>,
}

/// Client-local configuration: where the backend lives and where to persist.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    server_url: String,
    storage_path: PathBuf,
    log_filter: String,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Defaults, then `client.toml`, then environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(path) = Self::default_file_path() {
            if path.exists() {
                builder = builder.merge_file(&path)?;
            }
        }
        builder.merge_env().build()
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    fn default_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pantheon").join("client.toml"))
    }

    fn default_storage_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        path.push("pantheon");
        path.push("storage.json");
        path
    }
}

/// Builder for [`ClientConfig`]; later settings override earlier ones.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    server_url: Option<String>,
    storage_path: Option<PathBuf>,
    log_filter: Option<String>,
}

impl ClientConfigBuilder {
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Apply values from a TOML file.
    pub fn merge_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        if let Some(url) = file.server_url {
            self.server_url = Some(url);
        }
        if let Some(storage) = file.storage_path {
            self.storage_path = Some(storage);
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = Some(filter);
        }
        Ok(self)
    }

    /// Apply `CLIENT_API_URL`, `PANTHEON_STORAGE` and `RUST_LOG`.
    pub fn merge_env(mut self) -> Self {
        if let Ok(url) = std::env::var("CLIENT_API_URL") {
            self.server_url = Some(url);
        }
        if let Ok(path) = std::env::var("PANTHEON_STORAGE") {
            self.storage_path = Some(PathBuf::from(path));
        }
        if let Ok(filter) = std::env::var("RUST_LOG") {
            self.log_filter = Some(filter);
        }
        self
    }

    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let server_url = self
            .server_url
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let server_url = server_url.trim_end_matches('/').to_string();
        if !(server_url.starts_with("http://") || server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(server_url));
        }

        Ok(ClientConfig {
            server_url,
            storage_path: self
                .storage_path
                .unwrap_or_else(ClientConfig::default_storage_path),
            log_filter: self
                .log_filter
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

/// The remote configuration could not be obtained. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("could not reach the server: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned status {0} for the app configuration")]
    Status(u16),
    #[error("invalid app configuration: {0}")]
    Decode(String),
}

/// Fetch the application configuration. No credentials are sent.
pub async fn fetch_app_config(http: &reqwest::Client, config: &ClientConfig) -> Result<AppConfig, ConfigLoadError> {
    let response = http.get(config.api_url(APP_CONFIG_PATH)).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ConfigLoadError::Status(status.as_u16()));
    }
    let app_config = response
        .json::<AppConfig>()
        .await
        .map_err(|e| ConfigLoadError::Decode(e.to_string()))?;
    tracing::info!("Loaded app configuration from {}", config.server_url());
    Ok(app_config)
}
