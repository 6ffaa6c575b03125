//! core
//!
//! Core domain types, policies, and configuration for molgate.
//!
//! # Modules
//!
//! - [`types`] - Strong types: IssueId, DepType
//! - [`classify`] - Which dependency types gate step progress
//! - [`sequence`] - Ordinal extraction and stable step ordering
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Classification and ordering are total: every input has a defined answer
//! - Unknown input degrades toward "blocks" and "sorts last"
//! - Nothing in `classify` or `sequence` performs I/O or holds state

pub mod classify;
pub mod config;
pub mod sequence;
pub mod types;
