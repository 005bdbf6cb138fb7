//! User-supplied updaters.
//!
//! A custom updater reaches the resolver in one of three shapes:
//!
//! - a path to an updater definition file (`.json`, `.yaml`, `.yml`),
//!   resolved against the working directory at resolution time;
//! - a structured definition written inline in the release configuration;
//! - an updater instance handed over directly from Rust code.
//!
//! A structured definition is an object with `readVersion` and
//! `writeVersion` members. Each member is a regular expression whose first
//! capture group marks the version: `readVersion` extracts it and
//! `writeVersion` replaces it.

use super::VersionUpdater;
use crate::error::{Error, UpdaterError};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

const READ_VERSION: &str = "readVersion";
const WRITE_VERSION: &str = "writeVersion";

#[derive(Clone)]
pub enum UpdaterSource {
    Path(String),
    Definition(Value),
    Instance(Arc<dyn VersionUpdater>),
}

impl UpdaterSource {
    /// Falsy configuration values (`""`, `false`, `0`, `null`) count as
    /// "no updater given".
    pub fn is_empty(&self) -> bool {
        match self {
            UpdaterSource::Path(path) => path.is_empty(),
            UpdaterSource::Definition(value) => match value {
                Value::Null | Value::Bool(false) => true,
                Value::Number(n) => n.as_f64() == Some(0.0),
                _ => false,
            },
            UpdaterSource::Instance(_) => false,
        }
    }
}

impl fmt::Debug for UpdaterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdaterSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            UpdaterSource::Definition(value) => f.debug_tuple("Definition").field(value).finish(),
            UpdaterSource::Instance(_) => f.write_str("Instance(..)"),
        }
    }
}

impl From<Arc<dyn VersionUpdater>> for UpdaterSource {
    fn from(updater: Arc<dyn VersionUpdater>) -> Self {
        UpdaterSource::Instance(updater)
    }
}

impl<'de> Deserialize<'de> for UpdaterSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(path) => UpdaterSource::Path(path),
            other => UpdaterSource::Definition(other),
        })
    }
}

/// Updater built from a structured definition.
#[derive(Debug, Clone)]
pub struct PatternUpdater {
    read: Regex,
    write: Regex,
}

impl PatternUpdater {
    pub fn from_definition(definition: &Value) -> Result<Self, UpdaterError> {
        let object = definition
            .as_object()
            .ok_or_else(|| UpdaterError::invalid_updater("definition is not an object"))?;

        Ok(Self {
            read: compile_member(object, READ_VERSION)?,
            write: compile_member(object, WRITE_VERSION)?,
        })
    }
}

fn compile_member(object: &Map<String, Value>, name: &str) -> Result<Regex, UpdaterError> {
    let pattern = match object.get(name) {
        Some(Value::String(pattern)) => pattern,
        Some(_) => {
            return Err(UpdaterError::invalid_updater(format!(
                "{name} is not a pattern string"
            )))
        }
        None => return Err(UpdaterError::invalid_updater(format!("{name} is missing"))),
    };

    let regex = Regex::new(pattern).map_err(|e| {
        UpdaterError::invalid_updater(format!("{name} is not a valid pattern: {e}"))
    })?;

    if regex.captures_len() < 2 {
        return Err(UpdaterError::invalid_updater(format!(
            "{name} has no capture group"
        )));
    }
    Ok(regex)
}

impl VersionUpdater for PatternUpdater {
    fn read_version(&self, contents: &str) -> Result<String, UpdaterError> {
        self.read
            .captures(contents)
            .and_then(|caps| caps.get(1))
            .map(|version| version.as_str().to_string())
            .ok_or_else(|| UpdaterError::version_not_found("custom"))
    }

    fn write_version(&self, contents: &str, version: &str) -> Result<String, UpdaterError> {
        let range = self
            .write
            .captures(contents)
            .and_then(|caps| caps.get(1))
            .map(|current| current.range())
            .ok_or_else(|| UpdaterError::version_not_found("custom"))?;

        let mut updated = String::with_capacity(contents.len() + version.len());
        updated.push_str(&contents[..range.start]);
        updated.push_str(version);
        updated.push_str(&contents[range.end..]);
        Ok(updated)
    }
}

/// Turns an [`UpdaterSource`] into a bound updater.
#[derive(Debug, Clone)]
pub struct CustomLoader {
    working_dir: PathBuf,
}

impl Default for CustomLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

impl CustomLoader {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    pub fn load(&self, source: &UpdaterSource) -> Result<Arc<dyn VersionUpdater>, Error> {
        match source {
            UpdaterSource::Instance(updater) => Ok(Arc::clone(updater)),
            UpdaterSource::Definition(definition) => {
                trace!("validating inline updater definition");
                Ok(Arc::new(PatternUpdater::from_definition(definition)?))
            }
            UpdaterSource::Path(path) => self.load_path(path),
        }
    }

    pub fn load_path(&self, path: &str) -> Result<Arc<dyn VersionUpdater>, Error> {
        let full_path = self.working_dir.join(path);
        debug!(path = %full_path.display(), "loading updater definition");

        let content = fs::read_to_string(&full_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => UpdaterError::module_not_found(&full_path),
            _ => UpdaterError::module_load(&full_path, e.to_string()),
        })?;

        let definition = parse_definition(&full_path, &content)?;
        Ok(Arc::new(PatternUpdater::from_definition(&definition)?))
    }
}

fn parse_definition(path: &Path, content: &str) -> Result<Value, UpdaterError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "yaml" | "yml" => serde_yaml::from_str(content)
            .map_err(|e| UpdaterError::module_load(path, e.to_string())),
        _ => serde_json::from_str(content)
            .map_err(|e| UpdaterError::module_load(path, e.to_string())),
    }
}
