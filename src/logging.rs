//! Subscriber setup for the `bumpfile` binary.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// How chatty the binary is, from `-q` up to `-vvv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, 2) => Self::Debug,
            (false, _) => Self::Trace,
        }
    }

    /// `RUST_LOG` wins; otherwise only this crate's events at our level.
    fn env_filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("bumpfile={}", LevelFilter::from(self))))
    }
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Quiet => LevelFilter::ERROR,
            Verbosity::Normal => LevelFilter::WARN,
            Verbosity::Verbose => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
            Verbosity::Trace => LevelFilter::TRACE,
        }
    }
}

/// Installs the global subscriber. Everything goes to stderr; stdout is
/// reserved for command output.
pub fn init(verbosity: Verbosity) {
    let detailed = verbosity >= Verbosity::Debug;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(verbosity.env_filter())
        .with_writer(std::io::stderr)
        .with_target(detailed)
        .with_file(detailed)
        .with_line_number(detailed)
        .compact();

    if verbosity > Verbosity::Normal {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
