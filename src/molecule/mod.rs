//! molecule
//!
//! Issue and dependency records for one molecule, as exported by the host
//! issue tracker.
//!
//! # Input Format
//!
//! A JSON array of issues, or an object with a `steps` array:
//!
//! ```json
//! [
//!   {
//!     "id": "gt-mol.2",
//!     "title": "Write tests",
//!     "status": "open",
//!     "dependencies": [
//!       { "depends_on_id": "gt-mol", "type": "parent-child" },
//!       { "depends_on_id": "gt-mol.1", "type": "blocks" }
//!     ]
//!   }
//! ]
//! ```
//!
//! The object form may also carry an `issues` array: issues outside the
//! molecule whose status steps depend on. They are never steps themselves.
//!
//! ```json
//! {
//!   "steps": [
//!     { "id": "gt-mol.1", "dependencies": [{ "depends_on_id": "infra-4", "type": "blocks" }] }
//!   ],
//!   "issues": [{ "id": "infra-4", "status": "closed" }]
//! }
//! ```
//!
//! Unused fields on issue records are ignored, so full host exports load
//! unchanged. The object form itself accepts only `steps` and `issues`.
//!
//! # Invariants
//!
//! - Steps are held in ascending ordinal order after loading
//! - Step ids are unique within a molecule
//! - This module never builds or walks a dependency graph; only each step's
//!   direct edges are read (see [`gate`])

pub mod gate;

pub use gate::{gate_step, Progress, StepGate, StepProgress};

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::classify::DependencyEdge;
use crate::core::sequence::{self, Sequenced};
use crate::core::types::{DepType, IssueId};

/// Errors from loading molecule data.
#[derive(Debug, Error)]
pub enum MoleculeError {
    #[error("failed to read molecule from {source_name}: {source}")]
    Read {
        source_name: String,
        source: std::io::Error,
    },

    #[error("failed to parse molecule from {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("duplicate step id: {0}")]
    DuplicateStep(IssueId),
}

/// Lifecycle status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Blocked,
    Closed,
    /// Any status this crate does not know. Never satisfies a dependency.
    #[serde(other)]
    Other,
}

impl Status {
    /// Whether an issue in this status satisfies a blocking dependency.
    pub fn is_closed(self) -> bool {
        self == Status::Closed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Blocked => "blocked",
            Status::Closed => "closed",
            Status::Other => "other",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed edge from an issue to the issue it depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// The issue depended on.
    pub depends_on_id: IssueId,
    /// Relationship label; a missing label is empty and therefore blocking.
    #[serde(rename = "type", default)]
    pub dep_type: DepType,
}

impl Dependency {
    pub fn new(depends_on_id: IssueId, dep_type: impl Into<DepType>) -> Self {
        Self {
            depends_on_id,
            dep_type: dep_type.into(),
        }
    }
}

impl DependencyEdge for Dependency {
    fn dep_type(&self) -> &str {
        self.dep_type.as_str()
    }
}

/// An issue record. Within a molecule, each issue is one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Issue {
    pub fn new(id: IssueId, status: Status) -> Self {
        Self {
            id,
            title: String::new(),
            status,
            dependencies: Vec::new(),
        }
    }

    /// Builder-style helper: add a dependency edge.
    pub fn depends_on(mut self, target: IssueId, dep_type: impl Into<DepType>) -> Self {
        self.dependencies.push(Dependency::new(target, dep_type));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Sequenced for Issue {
    fn step_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Object form of a molecule document.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MoleculeDoc {
    steps: Vec<Issue>,
    #[serde(default)]
    issues: Vec<Issue>,
}

/// The steps of one molecule, in ordinal order.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    steps: Vec<Issue>,
    /// Statuses of issues outside the molecule that steps may depend on.
    external: HashMap<IssueId, Status>,
}

impl Molecule {
    /// Build a molecule from step issues.
    ///
    /// Steps are sorted by ordinal; ties keep the given order.
    ///
    /// # Errors
    ///
    /// Returns `MoleculeError::DuplicateStep` if two steps share an id.
    pub fn new(mut steps: Vec<Issue>) -> Result<Self, MoleculeError> {
        let mut seen = HashSet::with_capacity(steps.len());
        for step in &steps {
            if !seen.insert(&step.id) {
                return Err(MoleculeError::DuplicateStep(step.id.clone()));
            }
        }

        sequence::sort_steps_by_ordinal(&mut steps);
        Ok(Self {
            steps,
            external: HashMap::new(),
        })
    }

    /// Parse a molecule from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, MoleculeError> {
        Self::parse(json, "input")
    }

    /// Read and parse a molecule from any reader (e.g. stdin).
    pub fn from_reader<R: Read>(mut reader: R, source_name: &str) -> Result<Self, MoleculeError> {
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .map_err(|e| MoleculeError::Read {
                source_name: source_name.to_string(),
                source: e,
            })?;
        Self::parse(&contents, source_name)
    }

    /// Read and parse a molecule from a file.
    pub fn from_path(path: &Path) -> Result<Self, MoleculeError> {
        let source_name = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| MoleculeError::Read {
            source_name: source_name.clone(),
            source: e,
        })?;
        Self::parse(&contents, &source_name)
    }

    fn parse(contents: &str, source_name: &str) -> Result<Self, MoleculeError> {
        let parse_error = |e: serde_json::Error| MoleculeError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        };

        let value: serde_json::Value = serde_json::from_str(contents).map_err(parse_error)?;
        let doc = if value.is_array() {
            MoleculeDoc {
                steps: serde_json::from_value(value).map_err(parse_error)?,
                issues: Vec::new(),
            }
        } else {
            serde_json::from_value(value).map_err(parse_error)?
        };

        let external = doc.issues.into_iter().map(|issue| (issue.id, issue.status));
        Ok(Self::new(doc.steps)?.with_external_statuses(external))
    }

    /// Record statuses of issues outside the molecule.
    ///
    /// A step's own status always wins over an external entry for the same id.
    pub fn with_external_statuses<I>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = (IssueId, Status)>,
    {
        self.external.extend(statuses);
        self
    }

    /// Steps in ascending ordinal order.
    pub fn steps(&self) -> &[Issue] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Look up a step by id.
    pub fn step(&self, id: &IssueId) -> Option<&Issue> {
        self.steps.iter().find(|s| &s.id == id)
    }

    /// Known status of any issue, step or external.
    pub fn status_of(&self, id: &IssueId) -> Option<Status> {
        self.step(id)
            .map(|s| s.status)
            .or_else(|| self.external.get(id).copied())
    }

    /// Evaluate every step's gate, in ordinal order.
    pub fn progress(&self) -> Progress<'_> {
        let statuses: HashMap<&IssueId, Status> = self
            .external
            .iter()
            .map(|(id, status)| (id, *status))
            .chain(self.steps.iter().map(|s| (&s.id, s.status)))
            .collect();

        Progress::new(
            self.steps
                .iter()
                .map(|step| StepProgress {
                    step,
                    gate: gate_step(step, |id| statuses.get(id).copied()),
                })
                .collect(),
        )
    }
}
