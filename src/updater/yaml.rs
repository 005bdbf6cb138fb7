use super::VersionUpdater;
use crate::error::UpdaterError;
use regex::{Captures, Regex};
use serde_yaml::Value;
use std::sync::LazyLock;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(version:[ \t]*)(["']?)([^"'\s#]+)(["']?)"#).unwrap()
});

/// YAML manifests (`build.yaml`, `pubspec.yaml`) with a top-level
/// `version` key.
///
/// The document must parse as YAML, but the version is taken verbatim from
/// the top-level `version:` line: an unquoted `1.10` stays `1.10` instead
/// of becoming the float `1.1`. Writing touches only that value so comments
/// and layout survive.
pub struct YamlUpdater;

impl Default for YamlUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlUpdater {
    pub fn new() -> Self {
        Self
    }
}

impl VersionUpdater for YamlUpdater {
    fn read_version(&self, contents: &str) -> Result<String, UpdaterError> {
        let document: Value = serde_yaml::from_str(contents)
            .map_err(|e| UpdaterError::parse("yaml", e.to_string()))?;

        if document.get("version").is_none() {
            return Err(UpdaterError::version_not_found("yaml"));
        }
        VERSION_REGEX
            .captures(contents)
            .map(|caps| caps[3].to_string())
            .ok_or_else(|| UpdaterError::version_not_found("yaml"))
    }

    fn write_version(&self, contents: &str, version: &str) -> Result<String, UpdaterError> {
        if !VERSION_REGEX.is_match(contents) {
            return Err(UpdaterError::version_not_found("yaml"));
        }
        let updated = VERSION_REGEX.replacen(contents, 1, |caps: &Captures| {
            format!("{}{}{version}{}", &caps[1], &caps[2], &caps[4])
        });
        Ok(updated.into_owned())
    }
}
