//! core::types
//!
//! Strong types for manifest entries.
//!
//! # Types
//!
//! - [`RepoRef`] - One parsed `[host/]org/repo[@branch]` manifest entry
//! - [`RepoRefError`] - Why a single line is not a valid entry
//!
//! # Validation
//!
//! A `RepoRef` always has a non-empty organisation and repository name.
//! Host and branch are independently optional; an empty host or branch in
//! the source text is treated as absent.
//!
//! # Examples
//!
//! ```
//! use turbolift::core::types::RepoRef;
//!
//! let repo: RepoRef = "github.example.com/org/repo@dev".parse().unwrap();
//! assert_eq!(repo.host(), Some("github.example.com"));
//! assert_eq!(repo.org_name(), "org");
//! assert_eq!(repo.repo_name(), "repo");
//! assert_eq!(repo.branch_name(), Some("dev"));
//! assert_eq!(repo.full_repo_name(), "github.example.com/org/repo");
//!
//! assert!("a/b/c/d".parse::<RepoRef>().is_err());
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use super::naming;
use super::paths::DEFAULT_WORK_ROOT;

/// Errors from parsing a single manifest line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepoRefError {
    #[error("expected [host/]org/repo, found {0} '/'-separated segments")]
    SegmentCount(usize),

    #[error("organisation name is empty")]
    EmptyOrg,

    #[error("repository name is empty")]
    EmptyRepo,

    #[error("more than one '@' in repository segment")]
    MultipleBranches,

    #[error("full repository name does not match host/org/repo")]
    InconsistentFullName,
}

/// One repository (and optional branch) named by a manifest line.
///
/// Derived names are computed on demand so they can never drift from the
/// stored fields.
///
/// # Example
///
/// ```
/// use turbolift::core::types::RepoRef;
///
/// let repo = RepoRef::parse("org/repo@dev").unwrap();
/// assert_eq!(repo.dir_name(), "repo-dev");
/// assert_eq!(repo.visible_name(), "org/repo@dev");
/// assert_eq!(repo.work_path(), std::path::PathBuf::from("work/org/repo-dev"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RepoRefFields")]
pub struct RepoRef {
    host: Option<String>,
    org_name: String,
    repo_name: String,
    full_repo_name: String,
    branch_name: Option<String>,
}

impl RepoRef {
    /// Parse one manifest line of the form `[host/]org/repo[@branch]`.
    ///
    /// The line is used verbatim: no trimming is applied, so surrounding
    /// whitespace becomes part of the outer segments.
    ///
    /// # Errors
    ///
    /// - `SegmentCount` unless the line has exactly 2 or 3 `/` segments
    /// - `MultipleBranches` if the repository segment has more than one `@`
    /// - `EmptyOrg` / `EmptyRepo` if either required segment is empty
    pub fn parse(line: &str) -> Result<Self, RepoRefError> {
        let segments: Vec<&str> = line.split('/').collect();
        let (host, org_name, repo_segment) = match segments.as_slice() {
            [org, repo] => (None, *org, *repo),
            [host, org, repo] => (Some(*host), *org, *repo),
            other => return Err(RepoRefError::SegmentCount(other.len())),
        };

        let (repo_name, branch_name) = match repo_segment.split_once('@') {
            None => (repo_segment, None),
            Some((_, rest)) if rest.contains('@') => {
                return Err(RepoRefError::MultipleBranches);
            }
            Some((name, branch)) => (name, Some(branch)),
        };

        if org_name.is_empty() {
            return Err(RepoRefError::EmptyOrg);
        }
        if repo_name.is_empty() {
            return Err(RepoRefError::EmptyRepo);
        }

        // The repository segment is a suffix of the line, so dropping the
        // `@branch` tail of the segment drops it from the line as well.
        let suffix_len = repo_segment.len() - repo_name.len();
        let full_repo_name = &line[..line.len() - suffix_len];

        Ok(Self {
            host: non_empty(host),
            org_name: org_name.to_string(),
            repo_name: repo_name.to_string(),
            full_repo_name: full_repo_name.to_string(),
            branch_name: non_empty(branch_name),
        })
    }

    /// Host segment, or `None` for the default host.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Organisation (owner) name.
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// Repository name without any branch suffix.
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    /// Canonical `[host/]org/repo` identity, without branch suffix.
    pub fn full_repo_name(&self) -> &str {
        &self.full_repo_name
    }

    /// Branch name, or `None` for the default branch.
    pub fn branch_name(&self) -> Option<&str> {
        self.branch_name.as_deref()
    }

    /// Directory name for this checkout: `repo` or `repo-branch`.
    pub fn dir_name(&self) -> String {
        naming::dir_name(&self.repo_name, self.branch_name())
    }

    /// Display name: `full_repo_name` or `full_repo_name@branch`.
    pub fn visible_name(&self) -> String {
        naming::visible_name(&self.full_repo_name, self.branch_name())
    }

    /// Work path under the default work root, e.g. `work/org/repo-dev`.
    pub fn work_path(&self) -> PathBuf {
        self.work_path_in(Path::new(DEFAULT_WORK_ROOT))
    }

    /// Work path under an explicit root: `<root>/<org>/<dir_name>`.
    pub fn work_path_in(&self, root: &Path) -> PathBuf {
        root.join(&self.org_name).join(self.dir_name())
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_string)
}

impl FromStr for RepoRef {
    type Err = RepoRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.visible_name())
    }
}

// Serialized form carries the derived names so downstream tools do not have
// to re-implement the naming conventions.
impl Serialize for RepoRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RepoRef", 7)?;
        state.serialize_field("host", &self.host)?;
        state.serialize_field("org_name", &self.org_name)?;
        state.serialize_field("repo_name", &self.repo_name)?;
        state.serialize_field("full_repo_name", &self.full_repo_name)?;
        state.serialize_field("branch_name", &self.branch_name)?;
        state.serialize_field("dir_name", &self.dir_name())?;
        state.serialize_field("visible_name", &self.visible_name())?;
        state.end()
    }
}

/// Stored fields of a [`RepoRef`], validated on deserialize.
#[derive(Deserialize)]
struct RepoRefFields {
    #[serde(default)]
    host: Option<String>,
    org_name: String,
    repo_name: String,
    full_repo_name: String,
    #[serde(default)]
    branch_name: Option<String>,
}

impl TryFrom<RepoRefFields> for RepoRef {
    type Error = RepoRefError;

    fn try_from(fields: RepoRefFields) -> Result<Self, Self::Error> {
        if fields.org_name.is_empty() {
            return Err(RepoRefError::EmptyOrg);
        }
        if fields.repo_name.is_empty() {
            return Err(RepoRefError::EmptyRepo);
        }
        let candidate = Self {
            host: non_empty(fields.host.as_deref()),
            org_name: fields.org_name,
            repo_name: fields.repo_name,
            full_repo_name: fields.full_repo_name,
            branch_name: non_empty(fields.branch_name.as_deref()),
        };

        // The stored fields must be exactly what the manifest line would parse to.
        let reparsed = Self::parse(&candidate.visible_name())?;
        if reparsed != candidate {
            return Err(RepoRefError::InconsistentFullName);
        }
        Ok(candidate)
    }
}
