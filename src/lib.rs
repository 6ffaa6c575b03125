//! molgate - dependency gating and step ordering for molecule workflows
//!
//! A molecule is a workflow made of ordered steps, each step an issue whose id
//! ends in `.N`. molgate answers two questions about it: which dependency edges
//! hold a step back, and in what order the steps run.
//!
//! # Architecture
//!
//! - [`core`] - Dependency classification, step sequencing, domain types, config
//! - [`molecule`] - Step documents and readiness gating
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. Only an explicit allow-list of dependency types is informational;
//!    everything else blocks
//! 2. Steps without a parsable ordinal sort after every numbered step
//! 3. Ordinal sorts are stable

pub mod cli;
pub mod core;
pub mod molecule;
pub mod ui;
