use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

    #[error("failed to parse config file '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },
}

impl ConfigError {
    pub fn config_read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigRead {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }
}
