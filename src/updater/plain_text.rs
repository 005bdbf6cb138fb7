use super::VersionUpdater;
use crate::error::UpdaterError;

/// A file whose entire contents are the version.
pub struct PlainTextUpdater;

impl Default for PlainTextUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainTextUpdater {
    pub fn new() -> Self {
        Self
    }
}

impl VersionUpdater for PlainTextUpdater {
    fn read_version(&self, contents: &str) -> Result<String, UpdaterError> {
        let version = contents.trim();
        if version.is_empty() {
            return Err(UpdaterError::version_not_found("plain-text"));
        }
        Ok(version.to_string())
    }

    fn write_version(&self, _contents: &str, version: &str) -> Result<String, UpdaterError> {
        Ok(version.to_string())
    }
}
