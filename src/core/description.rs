//! core::description
//!
//! Pull request title and body extraction from a README-style document.
//!
//! The first line is the title, with its leading run of `#` and space
//! characters removed. Every following line, newline-joined, is the body.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::errors::LoadError;

/// Fixed name of the description document in a campaign directory.
pub const DESCRIPTION_FILE: &str = "README.md";

/// Title and body for the pull requests raised by a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrDescription {
    pub title: String,
    pub body: String,
}

/// Read and split the description document at `path`.
///
/// # Errors
///
/// Returns `LoadError::Io` naming `path` if it cannot be opened or read.
pub fn read_description(path: &Path) -> Result<PrDescription, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    parse_description(BufReader::new(file), path)
}

/// Split a document into title and body.
///
/// # Example
///
/// ```
/// use turbolift::core::description::parse_description;
/// use std::path::Path;
///
/// let doc = "## Bump the base image\n\nFixes CVE-2024-0001.\n";
/// let pr = parse_description(doc.as_bytes(), Path::new("README.md")).unwrap();
/// assert_eq!(pr.title, "Bump the base image");
/// assert_eq!(pr.body, "\nFixes CVE-2024-0001.");
/// ```
pub fn parse_description<R: BufRead>(reader: R, path: &Path) -> Result<PrDescription, LoadError> {
    let mut lines = reader.lines();

    let title = match lines.next() {
        Some(line) => strip_heading(&line.map_err(|e| LoadError::io(path, e))?).to_string(),
        None => return Ok(PrDescription::default()),
    };

    let body = lines
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| LoadError::io(path, e))?
        .join("\n");

    Ok(PrDescription { title, body })
}

/// Remove the leading run of `#` and space characters, in any order.
///
/// ```
/// use turbolift::core::description::strip_heading;
///
/// assert_eq!(strip_heading("## Foo"), "Foo");
/// assert_eq!(strip_heading("##Foo"), "Foo");
/// assert_eq!(strip_heading(" # #Foo # "), "Foo # ");
/// assert_eq!(strip_heading("\tFoo"), "\tFoo");
/// ```
pub fn strip_heading(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '#' || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(text: &str) -> PrDescription {
        parse_description(text.as_bytes(), Path::new("README.md")).unwrap()
    }

    #[test]
    fn title_and_body() {
        let pr = parse("# Title\nBody text\n");
        assert_eq!(pr.title, "Title");
        assert_eq!(pr.body, "Body text");
    }

    #[test]
    fn multi_line_body_is_newline_joined() {
        let pr = parse("# Title\nline one\n\nline three");
        assert_eq!(pr.body, "line one\n\nline three");
    }

    #[test]
    fn single_line_has_empty_body() {
        let pr = parse("# Only a title\n");
        assert_eq!(pr.title, "Only a title");
        assert_eq!(pr.body, "");
    }

    #[test]
    fn empty_document() {
        assert_eq!(parse(""), PrDescription::default());
    }

    #[test]
    fn blank_first_line_is_the_title() {
        let pr = parse("\n# Real title\nbody");
        assert_eq!(pr.title, "");
        assert_eq!(pr.body, "# Real title\nbody");
    }

    #[test]
    fn bare_hash_first_line_gives_empty_title() {
        let pr = parse("#\nFirst paragraph");
        assert_eq!(pr.title, "");
        assert_eq!(pr.body, "First paragraph");
    }

    #[test]
    fn title_without_markup_is_unchanged() {
        assert_eq!(parse("Plain title\nbody").title, "Plain title");
    }

    #[test]
    fn only_hash_and_space_are_stripped() {
        assert_eq!(strip_heading("## Foo"), "Foo");
        assert_eq!(strip_heading("##Foo"), "Foo");
        assert_eq!(strip_heading("# # Foo"), "Foo");
        assert_eq!(strip_heading("\t# Foo"), "\t# Foo");
        assert_eq!(strip_heading("Foo #"), "Foo #");
    }

    #[test]
    fn body_lines_are_verbatim() {
        let pr = parse("# T\n## Section\n  indented  ");
        assert_eq!(pr.body, "## Section\n  indented  ");
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DESCRIPTION_FILE);
        let err = read_description(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("README.md"));
    }

    #[test]
    fn read_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DESCRIPTION_FILE);
        fs::write(&path, "# Upgrade logging\nSwitch every service to v2.\n").unwrap();

        let pr = read_description(&path).unwrap();
        assert_eq!(pr.title, "Upgrade logging");
        assert_eq!(pr.body, "Switch every service to v2.");
    }
}
