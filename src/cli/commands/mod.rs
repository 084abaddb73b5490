//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves configuration and campaign paths
//! 2. Calls into `core` to load the campaign
//! 3. Formats and displays output
//!
//! Handlers never parse manifests themselves.

mod config_cmd;
mod repos;
mod show;

pub use config_cmd::config;
pub use repos::repos;
pub use show::show;

use crate::cli::args::Command;
use crate::cli::Context;
use crate::core::campaign::Campaign;
use crate::core::config::Config;
use crate::core::paths::CampaignPaths;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Show { json } => show::show(ctx, json),
        Command::Repos { paths } => repos::repos(ctx, paths),
        Command::Config => config_cmd::config(ctx),
    }
}

/// Load configuration for the campaign directory, reporting warnings.
fn load_config(ctx: &Context) -> Result<Config> {
    let verbosity = ctx.verbosity();
    let result = Config::load(Some(&ctx.cwd)).context("Failed to load config")?;

    for warning in &result.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }
    if let Some(path) = result.config.global_config_loaded_from() {
        output::debug(format!("Global config: {}", path.display()), verbosity);
    }
    if let Some(path) = result.config.campaign_config_loaded_from() {
        output::debug(format!("Campaign config: {}", path.display()), verbosity);
    }

    Ok(result.config)
}

/// Campaign paths with config applied and CLI flags taking precedence.
fn campaign_paths(ctx: &Context, config: &Config) -> CampaignPaths {
    let mut paths = config.campaign_paths(&ctx.cwd);
    if let Some(repos) = &ctx.repos {
        paths = paths.with_repos_file(repos);
    }
    if let Some(work_root) = &ctx.work_root {
        paths = paths.with_work_root(work_root);
    }
    paths
}

/// Load the campaign for this context.
fn open_campaign(ctx: &Context) -> Result<(Campaign, CampaignPaths)> {
    let verbosity = ctx.verbosity();
    let config = load_config(ctx)?;
    let paths = campaign_paths(ctx, &config);

    output::debug(
        format!("Manifest: {}", paths.manifest_path().display()),
        verbosity,
    );
    output::debug(
        format!("Description: {}", paths.description_path().display()),
        verbosity,
    );

    let campaign = Campaign::open(&paths)
        .with_context(|| format!("Failed to load campaign in {}", ctx.cwd.display()))?;

    output::debug(
        format!("Loaded {} repositories", campaign.repos().len()),
        verbosity,
    );

    Ok((campaign, paths))
}
