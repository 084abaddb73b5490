//! config command - Show the effective configuration

use crate::cli::Context;
use anyhow::Result;

/// List effective configuration values and their sources.
///
/// CLI overrides (`--repos`, `--work-root`) are reflected in the values.
pub fn config(ctx: &Context) -> Result<()> {
    let config = super::load_config(ctx)?;
    let paths = super::campaign_paths(ctx, &config);

    println!("# Effective Configuration");
    println!("repos_file = {}", paths.repos_file.display());
    println!("work_root = {}", paths.work_root.display());

    println!();
    println!("# Sources");
    match config.global_config_loaded_from() {
        Some(path) => println!("global = {}", path.display()),
        None => println!("global = (not found)"),
    }
    match config.campaign_config_loaded_from() {
        Some(path) => println!("campaign = {}", path.display()),
        None => println!("campaign = (not found)"),
    }

    Ok(())
}
