//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default time budget used when the optimize command gets no flag
//! - What-if deltas applied during sensitivity analysis
//! - Task-count cap for the exhaustive optimizer
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;
use crate::optimizer::what_if::DEFAULT_DELTAS;
use crate::optimizer::DEFAULT_MAX_TASKS;

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Budget in hours assumed when none is given on the command line.
    #[serde(default = "default_budget_hours")]
    pub default_budget_hours: f64,
    /// Budget perturbations applied by what-if analysis, in order.
    #[serde(default = "default_what_if_deltas")]
    pub what_if_deltas: Vec<f64>,
    /// Maximum task count accepted by the exhaustive optimizer.
    #[serde(default = "default_max_tasks")]
    pub max_tasks: usize,
}

fn default_budget_hours() -> f64 {
    8.0
}
fn default_what_if_deltas() -> Vec<f64> {
    DEFAULT_DELTAS.to_vec()
}
fn default_max_tasks() -> usize {
    DEFAULT_MAX_TASKS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_budget_hours: default_budget_hours(),
            what_if_deltas: default_what_if_deltas(),
            max_tasks: default_max_tasks(),
        }
    }
}

impl Config {
    fn path() -> Result<std::path::PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    /// Returns an error when the file exists but fails to parse, or when
    /// writing the default config fails.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
