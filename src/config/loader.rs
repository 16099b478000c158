// Configuration loader
// Loads ~/.mathagent/config.toml (optional) and the API key from the environment

use std::fs;
use std::path::{Path, PathBuf};

use super::constants::API_KEY_ENV;
use super::settings::Config;
use crate::error::ConfigError;

/// Default config file location, if a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mathagent").join("config.toml"))
}

/// Load configuration for the running process.
///
/// An explicit `path` must exist; the default location is optional. The
/// `GOOGLE_API_KEY` environment variable overrides any key in the file.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let env_key = std::env::var(API_KEY_ENV).ok();

    match path {
        Some(path) => load_config_from(Some(path), env_key),
        None => {
            let default_path = default_config_path().filter(|p| p.exists());
            load_config_from(default_path.as_deref(), env_key)
        }
    }
}

/// Load configuration from an optional file plus an optional credential.
///
/// Split from `load_config` so tests don't depend on process environment.
pub fn load_config_from(path: Option<&Path>, env_key: Option<String>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => Config::default(),
    };

    if let Some(key) = env_key.filter(|key| !key.trim().is_empty()) {
        config.provider.api_key = Some(key);
    }

    config.validate()?;

    tracing::debug!(
        model = %config.provider.model,
        bind = %config.server.bind_address,
        "Configuration loaded"
    );

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
