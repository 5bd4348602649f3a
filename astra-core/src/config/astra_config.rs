//! Top-level Astra configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, QueryConfig, RandomConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ASTRA_*`)
/// 2. Config file (`astra.toml` or an explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AstraConfig {
    pub query: QueryConfig,
    pub random: RandomConfig,
    pub logging: LoggingConfig,
}

impl AstraConfig {
    /// Load configuration from `path`, apply environment overrides, validate.
    ///
    /// A missing file is not an error; compiled defaults are used instead.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Override values from `ASTRA_*` environment variables.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(constants::ENV_SEED) {
            if let Ok(v) = val.parse::<u64>() {
                self.random.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var(constants::ENV_N_QUERY_SAMPLES) {
            if let Ok(v) = val.parse::<usize>() {
                self.query.n_query_samples = v;
            }
        }
        if let Ok(val) = std::env::var(constants::ENV_N_MC_SAMPLES) {
            if let Ok(v) = val.parse::<usize>() {
                self.query.n_mc_samples = v;
            }
        }
        if let Ok(val) = std::env::var(constants::ENV_BATCH_SIZE) {
            if let Ok(v) = val.parse::<usize>() {
                self.query.batch_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var(constants::ENV_LOG_LEVEL) {
            self.logging.level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.n_query_samples == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "query.n_query_samples".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.query.n_mc_samples == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "query.n_mc_samples".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.query.batch_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "query.batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "logging.level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
