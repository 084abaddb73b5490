//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting, verbosity, and diagnostics
//!
//! # Design
//!
//! All console output goes through this module so quiet and debug modes
//! are honored consistently. The `core` layer never prints.

pub mod output;
