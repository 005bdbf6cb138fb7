mod config;
mod format;
mod io;
mod updater;

pub use config::ConfigError;
pub use format::FormatError;
pub use io::IoError;
pub use updater::UpdaterError;

use thiserror::Error;

/// How a failure should be reported at the resolution boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// A referenced updater definition does not exist. Reported silently.
    NotFound,
    Other,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Updater(#[from] UpdaterError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] IoError),
}

impl Error {
    pub fn classification(&self) -> ErrorClass {
        match self {
            Error::Updater(UpdaterError::ModuleNotFound { .. }) => ErrorClass::NotFound,
            _ => ErrorClass::Other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.classification() == ErrorClass::NotFound
    }
}

pub type Result<T> = std::result::Result<T, Error>;
