//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Use this directory as the campaign
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--repos <file>`: Manifest filename (overrides config)
//! - `--work-root <dir>`: Checkout root (overrides config)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Turbolift - load a multi-repository change campaign
#[derive(Parser, Debug)]
#[command(name = "turbolift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this directory as the campaign instead of the current one
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Manifest filename, relative to the campaign directory
    #[arg(long, global = true, value_name = "FILE")]
    pub repos: Option<String>,

    /// Directory checkouts are placed under
    #[arg(long, global = true, value_name = "DIR")]
    pub work_root: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the campaign: name, PR title, and repositories
    #[command(
        name = "show",
        long_about = "Load the campaign in the current directory and summarize it.\n\n\
            Reads the repository manifest (repos.txt by default) and README.md. \
            The README's first line becomes the PR title and the rest the body. \
            Loading fails on the first malformed manifest line.",
        after_help = "\
EXAMPLES:
    # Summarize the campaign
    turbolift show

    # Machine-readable output for other tools
    turbolift show --json

    # Use a different manifest
    turbolift --repos batch-2.txt show"
    )]
    Show {
        /// Print the campaign as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the campaign's repositories, one per line
    #[command(name = "repos")]
    Repos {
        /// Print each repository's work path instead of its name
        #[arg(long)]
        paths: bool,
    },

    /// Show the effective configuration and where it came from
    #[command(name = "config")]
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_show_json() {
        let cli = Cli::try_parse_from(["turbolift", "show", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Show { json: true }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["turbolift", "repos", "--paths", "--repos", "b.txt", "-q"])
            .unwrap();
        assert!(matches!(cli.command, Command::Repos { paths: true }));
        assert_eq!(cli.repos.as_deref(), Some("b.txt"));
        assert!(cli.quiet);
    }

    #[test]
    fn command_is_required() {
        assert!(Cli::try_parse_from(["turbolift"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
