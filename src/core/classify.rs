//! core::classify
//!
//! Dependency classification: which edges gate molecule step progress.
//!
//! # Policy
//!
//! A closed allow-list names the dependency types that are informational
//! (traceability, hierarchy, provenance). Every other label blocks, including
//! the empty string, labels this crate has never heard of, and case variants
//! of listed labels.
//!
//! # Invariants
//!
//! - Classification is a total function of the label
//! - Matching is exact and case-sensitive
//! - An unrecognized label never resolves to non-blocking
//!
//! # Example
//!
//! ```
//! use molgate::core::classify::{classify, is_blocking, Gating};
//!
//! assert!(is_blocking("blocks"));
//! assert!(is_blocking("needs"));
//! assert!(is_blocking(""));
//! assert!(!is_blocking("parent-child"));
//! assert_eq!(classify("tracks"), Gating::NonBlocking);
//! ```

use serde::{Deserialize, Serialize};

use super::types::DepType;

/// Dependency types that never gate progress.
pub const NON_BLOCKING_DEP_TYPES: &[&str] = &[
    "parent-child",
    "tracks",
    "related",
    "discovered-from",
    "caused-by",
    "validates",
    "relates-to",
    "supersedes",
];

/// Verdict for a single dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gating {
    /// The edge gates progress until its target is closed.
    Blocking,
    /// The edge is informational only.
    NonBlocking,
}

impl Gating {
    /// Whether this verdict gates progress.
    pub fn is_blocking(self) -> bool {
        self == Gating::Blocking
    }

    /// Stable lowercase name, as printed by the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Gating::Blocking => "blocking",
            Gating::NonBlocking => "non-blocking",
        }
    }
}

impl std::fmt::Display for Gating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if an edge of this type should gate step progress.
pub fn is_blocking(dep_type: &str) -> bool {
    !is_non_blocking(dep_type)
}

/// Returns true if an edge of this type is informational only.
pub fn is_non_blocking(dep_type: &str) -> bool {
    NON_BLOCKING_DEP_TYPES.contains(&dep_type)
}

/// Classify a dependency type.
pub fn classify(dep_type: &str) -> Gating {
    if is_blocking(dep_type) {
        Gating::Blocking
    } else {
        Gating::NonBlocking
    }
}

/// Anything that carries a dependency type label.
pub trait DependencyEdge {
    /// The edge's dependency type label.
    fn dep_type(&self) -> &str;
}

impl DependencyEdge for DepType {
    fn dep_type(&self) -> &str {
        self.as_str()
    }
}

impl DependencyEdge for str {
    fn dep_type(&self) -> &str {
        self
    }
}

impl DependencyEdge for String {
    fn dep_type(&self) -> &str {
        self
    }
}

impl<T: DependencyEdge + ?Sized> DependencyEdge for &T {
    fn dep_type(&self) -> &str {
        (**self).dep_type()
    }
}

impl<K: DependencyEdge, V> DependencyEdge for (K, V) {
    fn dep_type(&self) -> &str {
        self.0.dep_type()
    }
}

/// Edges split by verdict. Each side keeps input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partitioned<T> {
    /// Edges that gate progress.
    pub blocking: Vec<T>,
    /// Informational edges.
    pub non_blocking: Vec<T>,
}

impl<T> Default for Partitioned<T> {
    fn default() -> Self {
        Self {
            blocking: Vec::new(),
            non_blocking: Vec::new(),
        }
    }
}

/// Split edges into blocking and non-blocking sets.
///
/// # Example
///
/// ```
/// use molgate::core::classify::partition_edges;
///
/// let edges = vec![("blocks", "X"), ("tracks", "Y"), ("relates-to", "Z"), ("unknown-type", "W")];
/// let split = partition_edges(edges);
///
/// let blocking: Vec<_> = split.blocking.iter().map(|(_, to)| *to).collect();
/// let informational: Vec<_> = split.non_blocking.iter().map(|(_, to)| *to).collect();
/// assert_eq!(blocking, vec!["X", "W"]);
/// assert_eq!(informational, vec!["Y", "Z"]);
/// ```
pub fn partition_edges<T, I>(edges: I) -> Partitioned<T>
where
    T: DependencyEdge,
    I: IntoIterator<Item = T>,
{
    let mut split = Partitioned::default();
    for edge in edges {
        if is_blocking(edge.dep_type()) {
            split.blocking.push(edge);
        } else {
            split.non_blocking.push(edge);
        }
    }
    split
}
