//! Default bump file lists used when the release configuration is silent.

use crate::target::BumpFile;

/// Manifests whose version is read to determine the current release.
pub const PACKAGE_FILES: &[&str] = &["package.json", "bower.json", "manifest.json"];

/// Filenames recognized as JSON manifests. Also the default `bumpFiles`.
pub const JSON_BUMP_FILES: &[&str] = &[
    "package.json",
    "bower.json",
    "manifest.json",
    "package-lock.json",
    "npm-shrinkwrap.json",
];

pub fn bump_files() -> Vec<BumpFile> {
    JSON_BUMP_FILES.iter().copied().map(BumpFile::from).collect()
}

pub fn package_files() -> Vec<BumpFile> {
    PACKAGE_FILES.iter().copied().map(BumpFile::from).collect()
}
