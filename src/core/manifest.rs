//! core::manifest
//!
//! Repository list parsing.
//!
//! # Format
//!
//! One entry per line, `[host/]org/repo[@branch]`. Empty lines and lines
//! starting with `#` are ignored. A line whose exact text was already seen
//! is skipped, so duplicates keep the position of their first occurrence.
//! Deduplication compares raw text only: `org/repo` and `org/repo ` are two
//! distinct entries.
//!
//! # Errors
//!
//! The first malformed line aborts the whole parse; no partial list is
//! returned.
//!
//! # Example
//!
//! ```
//! use turbolift::core::manifest::parse_manifest;
//! use std::path::Path;
//!
//! let text = "# services\norg/api\norg/web@next\n\norg/api\n";
//! let repos = parse_manifest(text.as_bytes(), Path::new("repos.txt")).unwrap();
//!
//! let names: Vec<String> = repos.iter().map(|r| r.visible_name()).collect();
//! assert_eq!(names, ["org/api", "org/web@next"]);
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::errors::LoadError;
use super::types::RepoRef;

/// Default manifest filename, relative to the campaign directory.
pub const DEFAULT_MANIFEST: &str = "repos.txt";

/// Read and parse the manifest at `path`.
///
/// # Errors
///
/// - `LoadError::Config` if `path` is empty
/// - `LoadError::Io` if the file cannot be opened or read
/// - `LoadError::Parse` on the first malformed line
pub fn read_manifest(path: &Path) -> Result<Vec<RepoRef>, LoadError> {
    if path.as_os_str().is_empty() {
        return Err(LoadError::Config("no repos filename to open".to_string()));
    }

    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    parse_manifest(BufReader::new(file), path)
}

/// Parse manifest lines from `reader`.
///
/// `path` is only used to name the manifest in errors.
pub fn parse_manifest<R: BufRead>(reader: R, path: &Path) -> Result<Vec<RepoRef>, LoadError> {
    let mut seen = HashSet::new();
    let mut repos = Vec::new();

    for line in reader.lines() {
        let mut line = line.map_err(|e| LoadError::io(path, e))?;
        // `lines` only strips `\r\n`; a final line may still end in a bare `\r`.
        if line.ends_with('\r') {
            line.pop();
        }

        if is_ignored(&line) {
            continue;
        }
        if !seen.insert(line.clone()) {
            continue;
        }

        let repo = RepoRef::parse(&line).map_err(|reason| LoadError::Parse {
            path: path.to_path_buf(),
            line: line.clone(),
            reason,
        })?;
        repos.push(repo);
    }

    Ok(repos)
}

/// Blank lines and `#` comments carry no entry.
fn is_ignored(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}
