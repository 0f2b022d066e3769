use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "BC_DASHBOARD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parsing config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Start-up settings. Every field has a default, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Rows shown under "Sample of the Dataset".
    pub preview_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 900.0,
            preview_rows: 5,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text, path)
    }

    /// Resolve the configuration: defaults, overridden by the file named by
    /// [`CONFIG_ENV`].
    ///
    /// A broken config file is logged and ignored.
    pub fn load() -> Self {
        Self::resolve(std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    fn resolve(config_path: Option<PathBuf>) -> Self {
        match config_path {
            Some(path) => match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Using config {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("{e}; falling back to defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
