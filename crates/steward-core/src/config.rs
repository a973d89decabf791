//! Configuration types for Steward.

use serde::{Deserialize, Serialize};
use std::path::Path;

use steward_monitor::{BuildMode, RateCeilings, DEFAULT_HISTORY_CAPACITY};

use crate::{error::StewardError, Result};

/// Configuration for the Steward store and pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StewardConfig {
    /// Buffer sizes.
    pub governance: GovernanceConfig,

    /// Request ceilings per pressure tier.
    pub limits: RateCeilings,

    /// Global settings.
    pub global: GlobalConfig,
}

/// Buffer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceConfig {
    /// Maximum signals kept in history.
    pub history_capacity: usize,

    /// Maximum decisions kept.
    pub decision_capacity: usize,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            decision_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Global Steward settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Build mode; read from the environment when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_mode: Option<BuildMode>,

    /// Log every collected signal.
    pub audit_logging: bool,

    /// Seed for the advisory audit score. Random when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_seed: Option<u64>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            build_mode: None,
            audit_logging: true,
            audit_seed: None,
        }
    }
}

impl StewardConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: StewardConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StewardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Rejects buffers and ceilings that would stall the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.governance.history_capacity == 0 {
            return Err(StewardError::Config(
                "governance.history_capacity must be at least 1".to_string(),
            ));
        }
        if self.governance.decision_capacity == 0 {
            return Err(StewardError::Config(
                "governance.decision_capacity must be at least 1".to_string(),
            ));
        }
        let limits = &self.limits;
        for (name, value) in [
            ("low", limits.low),
            ("medium", limits.medium),
            ("high", limits.high),
            ("critical", limits.critical),
        ] {
            if value == 0 {
                return Err(StewardError::Config(format!(
                    "limits.{} must be at least 1",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Effective build mode: the configured one, else the environment.
    pub fn build_mode(&self) -> BuildMode {
        self.global.build_mode.unwrap_or_else(BuildMode::from_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StewardConfig::default();
        assert_eq!(config.governance.history_capacity, 50);
        assert_eq!(config.governance.decision_capacity, 50);
        assert_eq!(config.limits.critical, 50);
        assert!(config.global.audit_logging);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = StewardConfig::from_toml_str("").unwrap();
        assert_eq!(config, StewardConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = StewardConfig::from_toml_str(
            r#"
            [governance]
            history_capacity = 10

            [limits]
            critical = 20

            [global]
            build_mode = "production"
            audit_seed = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.governance.history_capacity, 10);
        assert_eq!(config.governance.decision_capacity, 50);
        assert_eq!(config.limits.critical, 20);
        assert_eq!(config.limits.low, 1000);
        assert_eq!(config.build_mode(), BuildMode::Production);
        assert_eq!(config.global.audit_seed, Some(9));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = StewardConfig::from_toml_str(include_str!("../../../config/steward.toml"))
            .unwrap();
        assert_eq!(config, StewardConfig::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = StewardConfig::from_toml_str("[governance]\nhistory_capacity = 0\n").unwrap_err();
        assert!(matches!(err, StewardError::Config(_)));
    }

    #[test]
    fn test_zero_ceiling_rejected() {
        let err = StewardConfig::from_toml_str("[limits]\nhigh = 0\n").unwrap_err();
        assert!(err.to_string().contains("limits.high"));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = StewardConfig::from_toml_str("[governance\n").unwrap_err();
        assert!(matches!(err, StewardError::ConfigParse(_)));
    }

    #[test]
    fn test_config_serialization() {
        let config = StewardConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: StewardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
