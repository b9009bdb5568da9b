//! Configuration management and validation.
//!
//! Provides the application configuration with sensible defaults, an
//! optional TOML file layer, and CLI overrides applied by the commands.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::models::SortOrder;
use crate::{Error, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory where export artifacts are written
    pub output_dir: PathBuf,

    /// Location of the auxiliary seat-map document
    ///
    /// When unset, `seats.json` next to the working directory is tried.
    pub seats_path: Option<PathBuf>,

    /// Display order applied to the table after each parse
    pub default_sort: SortOrder,

    /// Resolve columns from the export's header row instead of fixed
    /// positions
    pub header_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            seats_path: None,
            default_sort: SortOrder::Name,
            header_mode: false,
        }
    }
}

impl Config {
    /// Default location of the user's config file
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("admission-processor").join("config.toml"))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Load configuration, layering an optional TOML file over the defaults
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::configuration(format!(
                        "Failed to read config file {}: {}",
                        path.display(),
                        e
                    ))
                })?;

                toml::from_str(&content).map_err(|e| {
                    Error::configuration(format!(
                        "Failed to parse config file {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
            None => Self::default(),
        };

        debug!("Loaded configuration: {:?}", config);
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::configuration("Output directory cannot be empty"));
        }

        Ok(())
    }
}
