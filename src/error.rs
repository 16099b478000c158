// Error types shared across the crate
//
// Transport and IO plumbing stays on anyhow; these are the failures callers
// branch on.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration failures. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Google API key not found. Please set the GOOGLE_API_KEY environment variable.")]
    CredentialNotFound,

    #[error("Failed to read configuration file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid bind address '{0}'")]
    InvalidBindAddress(String),
}

/// Failure of the external generation call.
///
/// One variant; the underlying cause is reachable through `source()`.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Failed to solve problem: {message}")]
    Generation {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl SolverError {
    pub(crate) fn generation(err: anyhow::Error) -> Self {
        Self::Generation {
            message: format!("{err:#}"),
            source: err.into(),
        }
    }
}

/// Problems building a classifier from keyword/pattern tables.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Invalid classifier pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to load classifier tables from {path}: {reason}")]
    Load { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_generation_error_keeps_cause() {
        let cause = anyhow::anyhow!("connection refused").context("Failed to send request");
        let err = SolverError::generation(cause);

        let display = err.to_string();
        assert!(display.starts_with("Failed to solve problem: "));
        assert!(display.contains("connection refused"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_credential_message() {
        assert!(ConfigError::CredentialNotFound
            .to_string()
            .contains("GOOGLE_API_KEY"));
    }
}
