use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::errors::CleanError;

/// Optional user configuration, read from `~/.tinyclean/config.toml`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Inactivity threshold in days when `--days` is not given
    #[serde(default = "default_stale_days")]
    pub stale_days: u32,

    /// Project search roots when `--projects-path` is not given
    #[serde(default)]
    pub project_paths: Vec<String>,

    /// Extra cache-like templates appended to the built-in list
    #[serde(default)]
    pub extra_cache_paths: Vec<String>,

    /// Entries shown per category unless verbose
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

fn default_stale_days() -> u32 {
    30
}
fn default_display_limit() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stale_days: default_stale_days(),
            project_paths: Vec::new(),
            extra_cache_paths: Vec::new(),
            display_limit: default_display_limit(),
        }
    }
}

impl Config {
    /// Get the TinyClean data directory (~/.tinyclean)
    pub fn data_dir(home: Option<&Path>) -> PathBuf {
        home.map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".tinyclean")
    }

    /// Get the default config file path
    pub fn config_path(home: Option<&Path>) -> PathBuf {
        Self::data_dir(home).join("config.toml")
    }

    /// Load config from an explicit path, or from the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>, home: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(CleanError::Config {
                        path: path.to_path_buf(),
                        message: "file not found".into(),
                    }
                    .into());
                }
                Self::load_from(path)
            }
            None => {
                let path = Self::config_path(home);
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&contents).map_err(|e| CleanError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
