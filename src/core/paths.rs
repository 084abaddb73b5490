//! core::paths
//!
//! Centralized path routing for campaign files.
//!
//! # Layout
//!
//! A campaign is a directory containing:
//! - `repos.txt` - The manifest (filename configurable)
//! - `README.md` - The PR description (fixed name)
//! - `.turbolift.toml` - Optional campaign-scoped config
//! - `work/<org>/<repo[-branch]>/` - Checkouts made by downstream tools
//!
//! No code outside this module should join campaign-relative paths by hand.
//!
//! # Example
//!
//! ```
//! use turbolift::core::paths::CampaignPaths;
//! use turbolift::core::types::RepoRef;
//! use std::path::PathBuf;
//!
//! let paths = CampaignPaths::new("/campaigns/bump-deps");
//! let repo = RepoRef::parse("org/api@next").unwrap();
//!
//! assert_eq!(paths.manifest_path(), PathBuf::from("/campaigns/bump-deps/repos.txt"));
//! assert_eq!(
//!     paths.repo_work_path(&repo),
//!     PathBuf::from("/campaigns/bump-deps/work/org/api-next")
//! );
//! ```

use std::path::{Path, PathBuf};

use super::description::DESCRIPTION_FILE;
use super::manifest::DEFAULT_MANIFEST;
use super::types::RepoRef;

/// Default directory, relative to the campaign, that holds checkouts.
pub const DEFAULT_WORK_ROOT: &str = "work";

/// Campaign-scoped config filename.
pub const CAMPAIGN_CONFIG_FILE: &str = ".turbolift.toml";

/// Every location a campaign reads from or hands to downstream tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignPaths {
    /// The campaign directory; its base name is the campaign name.
    pub campaign_dir: PathBuf,

    /// Manifest filename, relative to `campaign_dir` unless absolute.
    pub repos_file: PathBuf,

    /// Work root, relative to `campaign_dir` unless absolute.
    pub work_root: PathBuf,
}

impl CampaignPaths {
    /// Paths with the default manifest name and work root.
    pub fn new(campaign_dir: impl Into<PathBuf>) -> Self {
        Self {
            campaign_dir: campaign_dir.into(),
            repos_file: PathBuf::from(DEFAULT_MANIFEST),
            work_root: PathBuf::from(DEFAULT_WORK_ROOT),
        }
    }

    /// Override the manifest filename.
    pub fn with_repos_file(mut self, repos_file: impl Into<PathBuf>) -> Self {
        self.repos_file = repos_file.into();
        self
    }

    /// Override the work root.
    pub fn with_work_root(mut self, work_root: impl Into<PathBuf>) -> Self {
        self.work_root = work_root.into();
        self
    }

    /// Path to the manifest.
    ///
    /// An empty `repos_file` yields an empty path, which the manifest reader
    /// rejects, rather than resolving to the campaign directory itself.
    pub fn manifest_path(&self) -> PathBuf {
        if self.repos_file.as_os_str().is_empty() {
            return PathBuf::new();
        }
        self.campaign_dir.join(&self.repos_file)
    }

    /// Path to the PR description document.
    pub fn description_path(&self) -> PathBuf {
        self.campaign_dir.join(DESCRIPTION_FILE)
    }

    /// Path to the campaign-scoped config file.
    pub fn config_path(&self) -> PathBuf {
        Self::config_path_in(&self.campaign_dir)
    }

    /// Campaign-scoped config path for an arbitrary directory.
    pub fn config_path_in(campaign_dir: &Path) -> PathBuf {
        campaign_dir.join(CAMPAIGN_CONFIG_FILE)
    }

    /// Absolute (or campaign-relative) work root.
    pub fn work_root(&self) -> PathBuf {
        self.campaign_dir.join(&self.work_root)
    }

    /// Where `repo` is checked out: `<work_root>/<org>/<dir_name>`.
    pub fn repo_work_path(&self, repo: &RepoRef) -> PathBuf {
        repo.work_path_in(&self.work_root())
    }

    /// Campaign name: the base name of the campaign directory.
    ///
    /// Falls back to the full directory text when there is no final
    /// component (e.g. `/`).
    pub fn campaign_name(&self) -> String {
        campaign_name(&self.campaign_dir)
    }
}

/// Base name of `dir`, used as the campaign name.
pub fn campaign_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
