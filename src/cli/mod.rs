//! cli
//!
//! Command-line interface layer for Turbolift.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve the campaign directory and configuration
//! - Delegate to command handlers and report errors
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and calls into
//! [`crate::core`] for all loading and parsing.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use crate::ui::output::Verbosity;
use anyhow::{Context as _, Result};
use std::path::PathBuf;

/// Execution context shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Campaign directory (absolute when derived from the process cwd)
    pub cwd: PathBuf,
    /// Enable debug output
    pub debug: bool,
    /// Minimal output
    pub quiet: bool,
    /// Manifest filename override from `--repos`
    pub repos: Option<String>,
    /// Work root override from `--work-root`
    pub work_root: Option<String>,
}

impl Context {
    /// Output verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let current = std::env::current_dir().context("Failed to determine current directory")?;
    // Canonical so `..` and symlinks resolve to a real base name.
    let cwd = match cli.cwd {
        Some(dir) => {
            let joined = current.join(&dir);
            std::fs::canonicalize(&joined)
                .with_context(|| format!("Failed to resolve directory {}", joined.display()))?
        }
        None => current,
    };

    let ctx = Context {
        cwd,
        debug: cli.debug,
        quiet: cli.quiet,
        repos: cli.repos,
        work_root: cli.work_root,
    };

    commands::dispatch(cli.command, &ctx)
}
