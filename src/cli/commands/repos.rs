//! repos command - List the campaign's repositories

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

/// Print one repository per line: its visible name, or its work path.
pub fn repos(ctx: &Context, paths: bool) -> Result<()> {
    let (campaign, campaign_paths) = super::open_campaign(ctx)?;
    let verbosity = ctx.verbosity();

    for repo in campaign.repos() {
        if paths {
            output::print(campaign_paths.repo_work_path(repo).display(), verbosity);
        } else {
            output::print(repo, verbosity);
        }
    }

    Ok(())
}
