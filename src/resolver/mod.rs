//! Target resolution.
//!
//! Binds an updater to a bump file. Exactly one tier is attempted, chosen in
//! this order:
//!
//! 1. an explicit `updater` (inline definition, instance, or path);
//! 2. an explicit `type`, looked up in the [`FormatRegistry`];
//! 3. the filename, matched against the registry allowlists.
//!
//! A failing tier never falls through to the next one. Failures never
//! escape [`Resolver::resolve`]: a missing updater definition file is
//! skipped silently, anything else is reported once through
//! [`Diagnostics`], and in both cases the result is `None`.

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::{FormatError, Result};
use crate::registry::{Format, FormatRegistry};
use crate::target::{BumpFile, BumpTarget, UpdaterKind};
use crate::updater::{CustomLoader, VersionUpdater};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

pub struct Resolver<'a> {
    registry: &'a FormatRegistry,
    loader: CustomLoader,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a FormatRegistry) -> Self {
        Self {
            registry,
            loader: CustomLoader::default(),
            diagnostics: &TracingDiagnostics,
        }
    }

    /// Directory that updater definition paths are resolved against.
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.loader = CustomLoader::new(working_dir);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: &'a dyn Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn resolve(&self, file: impl Into<BumpFile>) -> Option<BumpTarget> {
        let file = file.into();

        match self.bind(&file) {
            Ok((updater, kind)) => {
                debug!(filename = %file.filename, updater = %kind, "resolved bump target");
                Some(BumpTarget::new(file, updater, kind))
            }
            Err(err) if err.is_not_found() => {
                debug!(filename = %file.filename, error = %err, "updater not found, skipping");
                None
            }
            Err(err) => {
                self.diagnostics.warn(&err.to_string());
                None
            }
        }
    }

    /// Resolves every file in order, dropping the ones that do not resolve.
    pub fn resolve_all<I>(&self, files: I) -> Vec<BumpTarget>
    where
        I: IntoIterator,
        I::Item: Into<BumpFile>,
    {
        files
            .into_iter()
            .filter_map(|file| self.resolve(file))
            .collect()
    }

    /// Version of the first package file that resolves, exists under
    /// `root` and can be read. Files that fail any of those steps are
    /// passed over.
    pub fn read_current_version<I>(&self, files: I, root: &Path) -> Option<(BumpTarget, String)>
    where
        I: IntoIterator,
        I::Item: Into<BumpFile>,
    {
        files
            .into_iter()
            .filter_map(|file| self.resolve(file))
            .find_map(|target| match target.read_version(root) {
                Ok(version) => {
                    debug!(filename = target.filename(), version = %version, "read current version");
                    Some((target, version))
                }
                Err(err) => {
                    trace!(filename = target.filename(), error = %err, "package file not readable");
                    None
                }
            })
    }

    fn bind(&self, file: &BumpFile) -> Result<(Arc<dyn VersionUpdater>, UpdaterKind)> {
        if let Some(source) = file.updater.as_ref().filter(|source| !source.is_empty()) {
            trace!(filename = %file.filename, "using custom updater");
            return Ok((self.loader.load(source)?, UpdaterKind::Custom));
        }

        if let Some(id) = file.format.as_deref().filter(|id| !id.is_empty()) {
            trace!(filename = %file.filename, format = id, "using explicit type");
            let format: Format = id.parse()?;
            return self.builtin(format);
        }

        trace!(filename = %file.filename, "inferring type from filename");
        let format = self
            .registry
            .infer_format_for_filename(&file.filename)
            .ok_or_else(|| FormatError::unsupported_file(&file.filename))?;
        self.builtin(format)
    }

    fn builtin(&self, format: Format) -> Result<(Arc<dyn VersionUpdater>, UpdaterKind)> {
        let updater = self.registry.get(format)?;
        Ok((updater, UpdaterKind::Builtin(format)))
    }
}
