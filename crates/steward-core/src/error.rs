//! Error types for Steward Core.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for steward operations.
#[derive(Debug, Error)]
pub enum StewardError {
    /// Configuration is structurally valid but unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("Cannot read config {path}: {source}")]
    ConfigRead {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`StewardConfig`](crate::StewardConfig).
    #[error("Cannot parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Rate limiter error passthrough.
    #[error("Rate limiter error: {0}")]
    Limiter(#[from] steward_monitor::LimiterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = StewardError::Config("history_capacity must be at least 1".to_string());
        assert!(err.to_string().contains("history_capacity"));
    }

    #[test]
    fn test_limiter_passthrough() {
        let err: StewardError = steward_monitor::LimiterError::InvalidLimit(0).into();
        assert!(matches!(err, StewardError::Limiter(_)));
    }
}
