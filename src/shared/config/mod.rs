//! Application configuration module
//!
//! `AppConfig` is the configuration the backend hands out at
//! `GET /api/config`. The client fetches it once at startup and passes it to
//! every screen; it is never persisted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Remote application configuration (backend connection parameters).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL of the data backend proxied under `/api/supabase`
    #[serde(default)]
    pub supabase_url: Option<String>,
    /// Public (anonymous) key for the data backend
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
    /// Anything else the server chooses to send
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
