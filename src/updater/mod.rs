//! Version updaters.
//!
//! An updater knows how to find the version string inside the contents of
//! one kind of bump file and how to replace it. Built-in updaters cover
//! JSON manifests, plain-text version files, Gradle build scripts and YAML
//! manifests; anything else is supplied through a [`custom`] definition.

pub mod custom;
pub mod gradle;
pub mod json;
pub mod plain_text;
pub mod yaml;

pub use custom::{CustomLoader, PatternUpdater, UpdaterSource};
pub use gradle::GradleUpdater;
pub use json::JsonUpdater;
pub use plain_text::PlainTextUpdater;
pub use yaml::YamlUpdater;

use crate::error::UpdaterError;

pub trait VersionUpdater: Send + Sync {
    fn read_version(&self, contents: &str) -> Result<String, UpdaterError>;

    fn write_version(&self, contents: &str, version: &str) -> Result<String, UpdaterError>;
}
