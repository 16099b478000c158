// Configuration structs

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use super::constants::{DEFAULT_GEMINI_BASE_URL, DEFAULT_HTTP_ADDR, DEFAULT_MODEL};
use crate::error::ConfigError;

/// Full runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Hosted model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Credential from the config file; `GOOGLE_API_KEY` takes precedence
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout; unset leaves the service default in place
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl ProviderConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Web tool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8501")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Relevance classifier settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// JSON file replacing the built-in keyword/pattern tables
    #[serde(default)]
    pub tables_path: Option<PathBuf>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_bind_address() -> String {
    DEFAULT_HTTP_ADDR.to_string()
}

impl Config {
    /// The resolved credential. Only valid after `validate()` succeeded.
    pub fn api_key(&self) -> &str {
        self.provider.api_key.as_deref().unwrap_or_default()
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind_address
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(self.server.bind_address.clone()))
    }

    /// Check that the configuration can start the process
    pub fn validate(&self) -> Result<(), ConfigError> {
        let has_key = self
            .provider
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty());
        if !has_key {
            return Err(ConfigError::CredentialNotFound);
        }

        self.bind_address()?;
        Ok(())
    }
}
