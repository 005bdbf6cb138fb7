//! Format registry.
//!
//! Maps each built-in [`Format`] to its updater and infers a format from a
//! bare filename using fixed allowlists. Built once, read-only afterwards.

mod format;

pub use format::Format;

use crate::defaults;
use crate::error::FormatError;
use crate::updater::{GradleUpdater, JsonUpdater, PlainTextUpdater, VersionUpdater, YamlUpdater};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

pub const PLAIN_TEXT_BUMP_FILES: &[&str] = &["VERSION.txt", "version.txt"];
pub const GRADLE_BUMP_FILES: &[&str] = &["build.gradle"];
pub const YAML_BUMP_FILES: &[&str] = &["build.yaml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchOn {
    Basename,
    FullPath,
}

#[derive(Debug, Clone)]
struct Allowlist {
    format: Format,
    match_on: MatchOn,
    filenames: Vec<String>,
}

impl Allowlist {
    fn new(format: Format, match_on: MatchOn, filenames: &[&str]) -> Self {
        Self {
            format,
            match_on,
            filenames: filenames.iter().map(|name| (*name).to_string()).collect(),
        }
    }

    fn matches(&self, filename: &str) -> bool {
        let candidate = match self.match_on {
            MatchOn::FullPath => filename,
            MatchOn::Basename => Path::new(filename)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(filename),
        };
        self.filenames.iter().any(|name| name == candidate)
    }
}

pub struct FormatRegistry {
    updaters: HashMap<Format, Arc<dyn VersionUpdater>>,
    allowlists: Vec<Allowlist>,
}

impl FormatRegistry {
    pub fn new() -> Result<Self, FormatError> {
        Self::with_json_files(defaults::JSON_BUMP_FILES)
    }

    /// Registry whose JSON allowlist is `json_files` instead of the defaults.
    pub fn with_json_files(json_files: &[&str]) -> Result<Self, FormatError> {
        let mut registry = Self::empty(json_files);

        registry.register(Format::Json, Arc::new(JsonUpdater::new()))?;
        registry.register(Format::PlainText, Arc::new(PlainTextUpdater::new()))?;
        registry.register(Format::Gradle, Arc::new(GradleUpdater::new()))?;
        registry.register(Format::Yaml, Arc::new(YamlUpdater::new()))?;

        debug!(formats = registry.updaters.len(), "format registry ready");
        Ok(registry)
    }

    fn empty(json_files: &[&str]) -> Self {
        // Order matters: the first matching allowlist wins.
        let allowlists = vec![
            Allowlist::new(Format::Json, MatchOn::Basename, json_files),
            Allowlist::new(Format::PlainText, MatchOn::FullPath, PLAIN_TEXT_BUMP_FILES),
            Allowlist::new(Format::Gradle, MatchOn::Basename, GRADLE_BUMP_FILES),
            Allowlist::new(Format::Yaml, MatchOn::Basename, YAML_BUMP_FILES),
        ];

        Self {
            updaters: HashMap::new(),
            allowlists,
        }
    }

    pub fn register(
        &mut self,
        format: Format,
        updater: Arc<dyn VersionUpdater>,
    ) -> Result<(), FormatError> {
        if self.updaters.contains_key(&format) {
            return Err(FormatError::duplicate_format(format.as_str()));
        }
        self.updaters.insert(format, updater);
        Ok(())
    }

    pub fn get(&self, format: Format) -> Result<Arc<dyn VersionUpdater>, FormatError> {
        self.updaters
            .get(&format)
            .cloned()
            .ok_or_else(|| FormatError::unknown_format(format.as_str()))
    }

    pub fn strategy_for_format(&self, id: &str) -> Result<Arc<dyn VersionUpdater>, FormatError> {
        self.get(id.parse()?)
    }

    pub fn infer_format_for_filename(&self, filename: &str) -> Option<Format> {
        let format = self
            .allowlists
            .iter()
            .find(|allowlist| allowlist.matches(filename))
            .map(|allowlist| allowlist.format);

        trace!(filename, format = ?format, "inferred format");
        format
    }
}
