//! core::naming
//!
//! Naming conventions derived from a manifest entry.
//!
//! # Conventions
//!
//! - Directory name: `repo` or `repo-branch`
//! - Visible name: `[host/]org/repo` or `[host/]org/repo@branch`
//!
//! An empty or absent branch means the repository's default branch and
//! never adds a suffix.

/// Directory name for a checkout of `repo_name` at `branch_name`.
///
/// # Example
///
/// ```
/// use turbolift::core::naming::dir_name;
///
/// assert_eq!(dir_name("repo", None), "repo");
/// assert_eq!(dir_name("repo", Some("dev")), "repo-dev");
/// ```
pub fn dir_name(repo_name: &str, branch_name: Option<&str>) -> String {
    match branch_name {
        Some(branch) if !branch.is_empty() => format!("{}-{}", repo_name, branch),
        _ => repo_name.to_string(),
    }
}

/// Display name for `full_repo_name` at `branch_name`.
///
/// # Example
///
/// ```
/// use turbolift::core::naming::visible_name;
///
/// assert_eq!(visible_name("org/repo", None), "org/repo");
/// assert_eq!(visible_name("org/repo", Some("dev")), "org/repo@dev");
/// ```
pub fn visible_name(full_repo_name: &str, branch_name: Option<&str>) -> String {
    match branch_name {
        Some(branch) if !branch.is_empty() => format!("{}@{}", full_repo_name, branch),
        _ => full_repo_name.to_string(),
    }
}
