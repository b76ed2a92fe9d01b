//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rstax/rstax.toml`
//! 3. Environment variables: `RSTAX_*` prefix
//! 4. CLI flags (applied by the command layer)

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};

/// Merged settings for the split pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Reserved parent-id token marking the root record
    pub sentinel: String,
    /// Depth cutoff for the core traversal
    pub max_depth: u32,
    /// Id of the clade kept in full regardless of depth
    pub clade: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sentinel: "-".to_string(),
            max_depth: 4,
            clade: None,
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> ApplicationResult<Self> {
        let mut builder = Config::builder()
            .set_default("sentinel", Settings::default().sentinel)
            .map_err(config_error)?
            .set_default("max_depth", i64::from(Settings::default().max_depth))
            .map_err(config_error)?;

        if let Some(path) = global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("RSTAX"));

        builder
            .build()
            .map_err(config_error)?
            .try_deserialize()
            .map_err(config_error)
    }

    /// Render the merged settings as TOML for `config show`.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

/// Location of the global config file, if a home directory can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rstax").map(|dirs| dirs.config_dir().join("rstax.toml"))
}

fn config_error(e: config::ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
