use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("Updater must be a string path or an object with readVersion and writeVersion methods ({reason})")]
    InvalidUpdater { reason: String },

    #[error("updater definition not found: {path}")]
    ModuleNotFound { path: PathBuf },

    #[error("failed to load updater definition '{path}': {message}")]
    ModuleLoad { path: PathBuf, message: String },

    #[error("no version found in {format} contents")]
    VersionNotFound { format: String },

    #[error("failed to parse {format} contents: {message}")]
    Parse { format: String, message: String },
}

impl UpdaterError {
    pub fn invalid_updater(reason: impl Into<String>) -> Self {
        Self::InvalidUpdater {
            reason: reason.into(),
        }
    }

    pub fn module_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ModuleNotFound { path: path.into() }
    }

    pub fn module_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ModuleLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn version_not_found(format: impl Into<String>) -> Self {
        Self::VersionNotFound {
            format: format.into(),
        }
    }

    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }
}
