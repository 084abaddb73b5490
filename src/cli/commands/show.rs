//! show command - Summarize the campaign in the current directory

use crate::cli::Context;
use crate::core::campaign::Campaign;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Show the campaign name, PR title, and repositories.
///
/// With `json`, prints the whole campaign as pretty JSON regardless of
/// `--quiet`.
pub fn show(ctx: &Context, json: bool) -> Result<()> {
    let (campaign, _) = super::open_campaign(ctx)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&campaign).context("Failed to serialize campaign")?;
        println!("{}", rendered);
        return Ok(());
    }

    output::print(render_summary(&campaign), ctx.verbosity());
    Ok(())
}

fn render_summary(campaign: &Campaign) -> String {
    let mut lines = vec![
        format!("Campaign: {}", campaign.name()),
        format!("PR title: {}", campaign.pr_title()),
        format!(
            "{}:",
            output::count(campaign.repos().len(), "repository", "repositories")
        ),
    ];
    if !campaign.repos().is_empty() {
        lines.push(output::format_list(campaign.repos(), "  "));
    }
    lines.join("\n")
}
