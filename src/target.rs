//! Bump file descriptors before and after resolution.

use crate::error::{IoError, Result};
use crate::registry::Format;
use crate::updater::{UpdaterSource, VersionUpdater};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// A file reference as written by the caller.
///
/// Deserializes from a bare filename or from an object with `filename`,
/// `type` and `updater` members.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "BumpFileRepr")]
pub struct BumpFile {
    pub filename: String,
    /// Explicit format identifier (`type` in configuration files).
    pub format: Option<String>,
    pub updater: Option<UpdaterSource>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BumpFileRepr {
    Filename(String),
    Descriptor {
        #[serde(default)]
        filename: String,
        #[serde(rename = "type", default)]
        format: Option<String>,
        #[serde(default)]
        updater: Option<UpdaterSource>,
    },
}

impl From<BumpFileRepr> for BumpFile {
    fn from(repr: BumpFileRepr) -> Self {
        match repr {
            BumpFileRepr::Filename(filename) => Self::new(filename),
            BumpFileRepr::Descriptor {
                filename,
                format,
                updater,
            } => Self {
                filename,
                format,
                updater,
            },
        }
    }
}

impl BumpFile {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            format: None,
            updater: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_updater(mut self, updater: impl Into<UpdaterSource>) -> Self {
        self.updater = Some(updater.into());
        self
    }
}

impl From<&str> for BumpFile {
    fn from(filename: &str) -> Self {
        Self::new(filename)
    }
}

impl From<String> for BumpFile {
    fn from(filename: String) -> Self {
        Self::new(filename)
    }
}

impl From<&BumpFile> for BumpFile {
    fn from(file: &BumpFile) -> Self {
        file.clone()
    }
}

/// Where the bound updater came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdaterKind {
    Builtin(Format),
    Custom,
}

impl fmt::Display for UpdaterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdaterKind::Builtin(format) => f.write_str(format.as_str()),
            UpdaterKind::Custom => f.write_str("custom"),
        }
    }
}

/// A bump file with a bound updater. Only the resolver creates these.
#[derive(Clone)]
pub struct BumpTarget {
    filename: String,
    format: Option<String>,
    updater: Arc<dyn VersionUpdater>,
    kind: UpdaterKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub path: PathBuf,
    pub previous: String,
    pub next: String,
    pub written: bool,
}

impl BumpTarget {
    pub(crate) fn new(file: BumpFile, updater: Arc<dyn VersionUpdater>, kind: UpdaterKind) -> Self {
        Self {
            filename: file.filename,
            format: file.format,
            updater,
            kind,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn explicit_type(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn updater(&self) -> &Arc<dyn VersionUpdater> {
        &self.updater
    }

    pub fn kind(&self) -> UpdaterKind {
        self.kind
    }

    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(&self.filename)
    }

    pub fn read_version(&self, root: &Path) -> Result<String> {
        let contents = self.read_contents(root)?;
        Ok(self.updater.read_version(&contents)?)
    }

    /// Rewrites the version in the file under `root`. With `dry_run` the
    /// file is left untouched and the outcome reports what would change.
    pub fn bump(&self, root: &Path, version: &str, dry_run: bool) -> Result<BumpOutcome> {
        let path = self.path(root);
        let contents = self.read_contents(root)?;

        let previous = self.updater.read_version(&contents)?;
        let updated = self.updater.write_version(&contents, version)?;

        if dry_run {
            debug!(path = %path.display(), "dry run, not writing");
        } else {
            fs::write(&path, updated).map_err(|e| IoError::write_error(&path, e))?;
            info!(path = %path.display(), from = %previous, to = version, "bumped version");
        }

        Ok(BumpOutcome {
            path,
            previous,
            next: version.to_string(),
            written: !dry_run,
        })
    }

    fn read_contents(&self, root: &Path) -> Result<String> {
        let path = self.path(root);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => IoError::file_not_found(&path).into(),
            _ => IoError::read_error(&path, e).into(),
        })
    }
}

impl fmt::Debug for BumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BumpTarget")
            .field("filename", &self.filename)
            .field("format", &self.format)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
