//! core
//!
//! Domain types, parsing, and assembly of campaigns.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RepoRef
//! - [`naming`] - Directory and display naming conventions
//! - [`manifest`] - Repository list parsing
//! - [`description`] - PR title/body extraction
//! - [`campaign`] - Campaign assembly
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for campaign files
//! - [`errors`] - Load error taxonomy
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Parsing is all-or-nothing: the first error aborts the load
//! - Nothing in this layer prints; errors are returned to the caller

pub mod campaign;
pub mod config;
pub mod description;
pub mod errors;
pub mod manifest;
pub mod naming;
pub mod paths;
pub mod types;
