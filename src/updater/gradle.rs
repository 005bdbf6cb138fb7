use super::VersionUpdater;
use crate::error::UpdaterError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(version\s*=\s*)(['"])([^'"\r\n]+)(['"])"#).unwrap()
});

/// `version = "x.y.z"` assignments in `build.gradle`.
pub struct GradleUpdater;

impl Default for GradleUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl GradleUpdater {
    pub fn new() -> Self {
        Self
    }

    fn captures(contents: &str) -> Result<Captures<'_>, UpdaterError> {
        VERSION_REGEX
            .captures(contents)
            .ok_or_else(|| UpdaterError::version_not_found("gradle"))
    }
}

impl VersionUpdater for GradleUpdater {
    fn read_version(&self, contents: &str) -> Result<String, UpdaterError> {
        Ok(Self::captures(contents)?[3].to_string())
    }

    fn write_version(&self, contents: &str, version: &str) -> Result<String, UpdaterError> {
        // Fail rather than silently writing an unchanged file.
        Self::captures(contents)?;
        let updated = VERSION_REGEX.replacen(contents, 1, |caps: &Captures| {
            format!("{}{}{version}{}", &caps[1], &caps[2], &caps[4])
        });
        Ok(updated.into_owned())
    }
}
