//! Architecture enforcement tests.
//!
//! The `core` layer returns errors and never reports them itself. All
//! console output flows through `ui::output` so quiet and debug modes are
//! honored. These tests scan the source tree so violations are caught in CI.
//!
//! # Test Categories
//!
//! 1. **Silent Core** - `core` must not print or panic on bad input
//! 2. **Thin Commands** - command handlers must not parse manifests

use std::fs;
use std::path::{Path, PathBuf};

/// Macros that write to the console.
const PRINT_MACROS: &[&str] = &["println!", "eprintln!", "print!(", "eprint!(", "dbg!("];

/// Collect every `.rs` file under `dir`, recursively.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap_or_else(|_| panic!("Failed to read {}", dir.display())) {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            files.push(path);
        }
    }
    files
}

/// Source text before the `#[cfg(test)]` module, if any.
fn non_test_source(path: &Path) -> String {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to read {}", path.display()));
    match content.find("#[cfg(test)]") {
        Some(idx) => content[..idx].to_string(),
        None => content,
    }
}

/// Lines that are code rather than comments or doc examples.
fn code_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
}

// =============================================================================
// Silent Core
// =============================================================================

/// Verify that `core` never writes to the console.
#[test]
fn core_does_not_print() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src/core")) {
        let source = non_test_source(&path);
        for (idx, line) in code_lines(&source) {
            if PRINT_MACROS.iter().any(|m| line.contains(m)) {
                violations.push(format!("{}:{}: {}", path.display(), idx + 1, line.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "core must return errors instead of printing:\n  {}",
        violations.join("\n  ")
    );
}

/// Verify that `core` does not unwrap outside of tests.
#[test]
fn core_does_not_unwrap() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src/core")) {
        let source = non_test_source(&path);
        for (idx, line) in code_lines(&source) {
            if line.contains(".unwrap()") || line.contains(".expect(") {
                violations.push(format!("{}:{}: {}", path.display(), idx + 1, line.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "core must propagate errors:\n  {}",
        violations.join("\n  ")
    );
}

// =============================================================================
// Thin Commands
// =============================================================================

/// Verify that command handlers load campaigns through `core`.
#[test]
fn commands_do_not_parse_manifests() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src/cli/commands")) {
        let source = non_test_source(&path);
        if source.contains("RepoRef::parse") || source.contains("parse_manifest") {
            violations.push(format!("{}: parses manifest lines directly", path.display()));
        }
    }

    assert!(
        violations.is_empty(),
        "Architecture violations found:\n  {}",
        violations.join("\n  ")
    );
}
