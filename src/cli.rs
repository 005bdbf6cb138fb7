use crate::config::Config;
use crate::target::BumpFile;
use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "bumpfile")]
#[command(about = "Resolve and update the version string in release bump files", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Release configuration file (defaults to .versionrc* in --dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory bump files and updater definitions are relative to
    #[arg(short = 'C', long, global = true, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show which updater each bump file resolves to
    Resolve {
        /// Updater type for the given files (json, plain-text, gradle, yaml)
        #[arg(long = "type", value_name = "TYPE")]
        format: Option<String>,

        /// Bump files (defaults to the configured bumpFiles)
        files: Vec<String>,
    },

    /// Print the current version, from FILE or the first readable packageFiles entry
    Read {
        #[arg(long = "type", value_name = "TYPE")]
        format: Option<String>,

        file: Option<String>,
    },

    /// Write a new version into every bump file that resolves
    Write {
        /// Version to write
        #[arg(long, value_name = "VERSION")]
        release_as: String,

        /// Report the changes without writing any file
        #[arg(long)]
        dry_run: bool,

        #[arg(long = "type", value_name = "TYPE")]
        format: Option<String>,

        files: Vec<String>,
    },
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if !self.dir.is_dir() {
            anyhow::bail!("Directory does not exist: {}", self.dir.display());
        }
        if let Some(ref config_path) = self.config {
            if !config_path.exists() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
        }
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        match self.config {
            Some(ref path) => Config::load(path)
                .with_context(|| format!("Cannot load config: {}", path.display())),
            None => Config::discover(&self.dir)
                .with_context(|| format!("Cannot load config from {}", self.dir.display())),
        }
    }
}

pub fn bump_file(filename: &str, format: Option<&str>) -> BumpFile {
    let file = BumpFile::new(filename);
    match format {
        Some(format) => file.with_type(format),
        None => file,
    }
}

/// Files named on the command line, or the configured `bumpFiles`.
pub fn bump_files(config: &Config, files: &[String], format: Option<&str>) -> Vec<BumpFile> {
    if files.is_empty() {
        return config.bump_files.clone();
    }
    files.iter().map(|file| bump_file(file, format)).collect()
}

pub fn working_dir(dir: &Path) -> PathBuf {
    dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf())
}
