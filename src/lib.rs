/// Bumpfile
///
/// Resolves, for each file a release touches, the updater that reads and
/// writes the version string inside it: a built-in format picked by type
/// or filename, or a user-supplied definition.
pub mod cli;
pub mod config;
pub mod defaults;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod registry;
pub mod resolver;
pub mod target;
pub mod updater;

pub use config::Config;
pub use diagnostics::{Diagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use error::{Error, ErrorClass, Result};
pub use registry::{Format, FormatRegistry};
pub use resolver::Resolver;
pub use target::{BumpFile, BumpOutcome, BumpTarget, UpdaterKind};
pub use updater::{UpdaterSource, VersionUpdater};
