//! core::campaign
//!
//! Campaign assembly: manifest + PR description + campaign name.
//!
//! # Lifecycle
//!
//! A [`Campaign`] is built once by [`Campaign::load`] or [`Campaign::open`]
//! and is read-only afterwards. Loading reads the manifest first, then the
//! description; the first failure is returned and nothing is assembled.
//!
//! # Example
//!
//! ```no_run
//! use turbolift::core::campaign::Campaign;
//! use turbolift::core::paths::CampaignPaths;
//!
//! let paths = CampaignPaths::new("/campaigns/bump-deps");
//! let campaign = Campaign::open(&paths).unwrap();
//!
//! println!("{}: {}", campaign.name(), campaign.pr_title());
//! for repo in campaign.repos() {
//!     println!("  {} -> {}", repo, paths.repo_work_path(repo).display());
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::description::{read_description, PrDescription};
use super::errors::LoadError;
use super::manifest::read_manifest;
use super::paths::CampaignPaths;
use super::types::RepoRef;

/// A loaded campaign: the repositories to change and the PR to raise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    name: String,
    repos: Vec<RepoRef>,
    pr_title: String,
    pr_body: String,
}

impl Campaign {
    /// Load a campaign from explicit inputs.
    ///
    /// `name` is supplied by the caller rather than read from process state.
    ///
    /// # Errors
    ///
    /// Propagates the first `LoadError` from the manifest or description.
    pub fn load(
        name: impl Into<String>,
        manifest_path: &Path,
        description_path: &Path,
    ) -> Result<Self, LoadError> {
        let repos = read_manifest(manifest_path)?;
        let description = read_description(description_path)?;
        Ok(Self::from_parts(name, repos, description))
    }

    /// Load the campaign rooted at `paths.campaign_dir`.
    ///
    /// The campaign name is the directory's base name.
    pub fn open(paths: &CampaignPaths) -> Result<Self, LoadError> {
        Self::load(
            paths.campaign_name(),
            &paths.manifest_path(),
            &paths.description_path(),
        )
    }

    /// Assemble a campaign from already-parsed parts.
    pub fn from_parts(
        name: impl Into<String>,
        repos: Vec<RepoRef>,
        description: PrDescription,
    ) -> Self {
        Self {
            name: name.into(),
            repos,
            pr_title: description.title,
            pr_body: description.body,
        }
    }

    /// Campaign name (the campaign directory's base name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Repositories in manifest order, raw-line duplicates removed.
    pub fn repos(&self) -> &[RepoRef] {
        &self.repos
    }

    pub fn pr_title(&self) -> &str {
        &self.pr_title
    }

    pub fn pr_body(&self) -> &str {
        &self.pr_body
    }
}
