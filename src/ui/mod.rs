//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing, diagnostics, and JSON output
//!
//! # Design
//!
//! All command output and diagnostics go through this module so that
//! `--quiet`, `--debug`, and `--json` behave the same in every command.
//! Results go to stdout; diagnostics go to stderr.

pub mod output;
