//! molecule::gate
//!
//! Step readiness: may a molecule step start?
//!
//! # Architecture
//!
//! Each step is gated by its own direct dependency edges. The classifier
//! decides which edges count; only blocking edges are checked against the
//! status of their target. Informational edges (parent-child, tracks, ...)
//! are never consulted.
//!
//! # Invariants
//!
//! - A closed step is `Done` regardless of its edges
//! - A step is `Ready` only when every blocking edge targets a closed issue
//! - A blocking edge whose target status is unknown holds the step back
//! - Gating is deterministic: `Blocked.by` follows edge order
//!
//! # Example
//!
//! ```
//! use molgate::core::types::IssueId;
//! use molgate::molecule::{Issue, Molecule, Status, StepGate};
//!
//! let id = |s: &str| IssueId::new(s).unwrap();
//! let molecule = Molecule::new(vec![
//!     Issue::new(id("m.2"), Status::Open).depends_on(id("m.1"), "blocks"),
//!     Issue::new(id("m.1"), Status::Open).depends_on(id("m"), "parent-child"),
//! ])
//! .unwrap();
//!
//! let progress = molecule.progress();
//! assert_eq!(progress.next_ready().map(|s| s.id.as_str()), Some("m.1"));
//! assert_eq!(progress.steps()[1].gate, StepGate::Blocked { by: vec![id("m.1")] });
//! ```

use serde::Serialize;

use super::{Issue, Status};
use crate::core::classify;
use crate::core::types::IssueId;

/// Gate verdict for a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StepGate {
    /// The step is closed.
    Done,
    /// Every blocking dependency is closed.
    Ready,
    /// Blocking dependencies that are not (known to be) closed.
    Blocked { by: Vec<IssueId> },
}

impl StepGate {
    pub fn is_ready(&self) -> bool {
        matches!(self, StepGate::Ready)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, StepGate::Done)
    }

    /// Short label for text output.
    pub fn label(&self) -> &'static str {
        match self {
            StepGate::Done => "done",
            StepGate::Ready => "ready",
            StepGate::Blocked { .. } => "blocked",
        }
    }
}

/// Gate one step.
///
/// `status_of` reports the status of a dependency target, or `None` when the
/// caller does not know it.
pub fn gate_step<F>(step: &Issue, status_of: F) -> StepGate
where
    F: Fn(&IssueId) -> Option<Status>,
{
    if step.status.is_closed() {
        return StepGate::Done;
    }

    let by: Vec<IssueId> = step
        .dependencies
        .iter()
        .filter(|dep| classify::is_blocking(dep.dep_type.as_str()))
        .filter(|dep| !status_of(&dep.depends_on_id).is_some_and(Status::is_closed))
        .map(|dep| dep.depends_on_id.clone())
        .collect();

    if by.is_empty() {
        StepGate::Ready
    } else {
        StepGate::Blocked { by }
    }
}

/// A step together with its gate verdict.
#[derive(Debug, Clone, Serialize)]
pub struct StepProgress<'a> {
    #[serde(flatten)]
    pub step: &'a Issue,
    pub gate: StepGate,
}

/// Gate verdicts for a whole molecule, in ordinal order.
#[derive(Debug, Clone, Serialize)]
pub struct Progress<'a> {
    steps: Vec<StepProgress<'a>>,
}

impl<'a> Progress<'a> {
    pub(crate) fn new(steps: Vec<StepProgress<'a>>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[StepProgress<'a>] {
        &self.steps
    }

    /// The first ready step in ordinal order.
    pub fn next_ready(&self) -> Option<&'a Issue> {
        self.steps
            .iter()
            .find(|p| p.gate.is_ready())
            .map(|p| p.step)
    }

    /// All ready steps, in ordinal order.
    pub fn ready(&self) -> impl Iterator<Item = &'a Issue> + '_ {
        self.steps
            .iter()
            .filter(|p| p.gate.is_ready())
            .map(|p| p.step)
    }

    pub fn done_count(&self) -> usize {
        self.steps.iter().filter(|p| p.gate.is_done()).count()
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    /// True when every step is closed. An empty molecule is complete.
    pub fn is_complete(&self) -> bool {
        self.done_count() == self.total()
    }
}
