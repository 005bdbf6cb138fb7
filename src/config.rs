//! Release configuration.
//!
//! Only the fields this crate acts on are read; everything else in the
//! file is ignored so the same `.versionrc` can drive the rest of the
//! release tooling.

use crate::defaults;
use crate::error::ConfigError;
use crate::target::BumpFile;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Looked up in this order by [`Config::discover`].
pub const CONFIG_FILES: &[&str] = &[
    ".versionrc",
    ".versionrc.json",
    ".versionrc.yaml",
    ".versionrc.yml",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "defaults::bump_files")]
    pub bump_files: Vec<BumpFile>,

    #[serde(default = "defaults::package_files")]
    pub package_files: Vec<BumpFile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bump_files: defaults::bump_files(),
            package_files: defaults::package_files(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::config_read(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: Config = match extension {
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::config_parse(path, e.to_string()))?,
            _ => serde_json::from_str(&content)
                .map_err(|e| ConfigError::config_parse(path, e.to_string()))?,
        };

        debug!(
            bump_files = config.bump_files.len(),
            package_files = config.package_files.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Loads the first config file found in `dir`, or the defaults.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        match Self::find(dir.as_ref()) {
            Some(path) => Self::load(path),
            None => {
                trace!(dir = %dir.as_ref().display(), "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn find(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}
