//! Turbolift - campaign manifest loading for multi-repository changes
//!
//! A campaign is a directory holding a repository manifest (`repos.txt`) and
//! a README whose first line becomes the pull request title. Turbolift loads
//! both into a [`core::campaign::Campaign`] that cloning and PR tooling
//! consume.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Domain types, parsing, configuration and paths
//! - [`ui`] - Output formatting and verbosity
//!
//! # Example
//!
//! ```
//! use turbolift::core::manifest::parse_manifest;
//! use std::path::Path;
//!
//! let repos = parse_manifest("org/repo@dev\n".as_bytes(), Path::new("repos.txt")).unwrap();
//! assert_eq!(repos[0].work_path(), Path::new("work/org/repo-dev"));
//! ```

pub mod cli;
pub mod core;
pub mod ui;
