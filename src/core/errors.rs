//! core::errors
//!
//! Error taxonomy for loading a campaign.
//!
//! # Design
//!
//! Every failure here is fatal to the load that produced it. Errors are
//! returned to the caller and never logged or retried inside `core`; the
//! CLI layer decides how to report them.
//!
//! # Example
//!
//! ```
//! use turbolift::core::errors::LoadError;
//! use turbolift::core::types::RepoRefError;
//! use std::path::PathBuf;
//!
//! let err = LoadError::Parse {
//!     path: PathBuf::from("repos.txt"),
//!     line: "a/b/c/d".to_string(),
//!     reason: RepoRefError::SegmentCount(4),
//! };
//! assert!(err.to_string().contains("repos.txt"));
//! assert!(err.to_string().contains("a/b/c/d"));
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::RepoRefError;

/// Errors from loading a manifest, a PR description, or a whole campaign.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file could not be opened or read.
    #[error("unable to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A manifest line does not match `[host/]org/repo[@branch]`.
    #[error("unable to parse entry in '{path}': {line:?} ({reason})")]
    Parse {
        path: PathBuf,
        line: String,
        reason: RepoRefError,
    },

    /// The load was configured incorrectly (e.g. no manifest filename).
    #[error("configuration error: {0}")]
    Config(String),
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LoadError::Io { path, .. } | LoadError::Parse { path, .. } => Some(path),
            LoadError::Config(_) => None,
        }
    }
}
