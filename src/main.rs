use anyhow::{Context as AnyhowContext, Result};
use bumpfile::cli::{self, Command};
use bumpfile::error::{Error, IoError};
use bumpfile::logging::{self, Verbosity};
use bumpfile::{FormatRegistry, Resolver};
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let config = args.load_config()?;
    let dir = cli::working_dir(&args.dir);
    let registry = FormatRegistry::new().context("Cannot build format registry")?;
    let resolver = Resolver::new(&registry).with_working_dir(&dir);

    match &args.command {
        Command::Resolve { format, files } => {
            let bump_files = cli::bump_files(&config, files, format.as_deref());
            for target in resolver.resolve_all(bump_files) {
                println!("{} -> {}", target.filename(), target.kind());
            }
        }
        Command::Read {
            format,
            file: Some(file),
        } => {
            let target = resolver
                .resolve(cli::bump_file(file, format.as_deref()))
                .with_context(|| format!("No updater could be resolved for {file}"))?;
            let version = target
                .read_version(&dir)
                .with_context(|| format!("Cannot read version from {file}"))?;
            println!("{version}");
        }
        Command::Read { file: None, .. } => {
            let (target, version) = resolver
                .read_current_version(&config.package_files, &dir)
                .context("No readable package file found (see packageFiles)")?;
            info!(filename = target.filename(), "read version from package file");
            println!("{version}");
        }
        Command::Write {
            release_as,
            dry_run,
            format,
            files,
        } => {
            let bump_files = cli::bump_files(&config, files, format.as_deref());
            for target in resolver.resolve_all(bump_files) {
                match target.bump(&dir, release_as, *dry_run) {
                    Ok(outcome) => {
                        let suffix = if outcome.written { "" } else { " (dry run)" };
                        println!(
                            "{}: {} -> {}{suffix}",
                            target.filename(),
                            outcome.previous,
                            outcome.next
                        );
                    }
                    Err(Error::Io(IoError::FileNotFound { path })) => {
                        info!(path = %path.display(), "bump file not present, skipping");
                    }
                    Err(err) => {
                        return Err(err)
                            .with_context(|| format!("Cannot bump {}", target.filename()));
                    }
                }
            }
        }
    }

    Ok(())
}
