//! Configuration for pathline
//!
//! Configuration is read from `pathline.toml`. Every section is optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{PathlineError, Result};

pub use types::{GraphConfig, LineupConfig, PathlineConfig, DEFAULT_MAX_ITEMS};

/// File name looked up in the working directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "pathline.toml";

impl PathlineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PathlineConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `path` if given, else `dir/pathline.toml` if it exists, else defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PathlineError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Fail when a line-up would exceed the configured size
    pub fn check_lineup_size(&self, count: usize) -> Result<()> {
        if count > self.lineup.max_items {
            return Err(PathlineError::TooManyItems {
                count,
                limit: self.lineup.max_items,
            });
        }
        Ok(())
    }
}
