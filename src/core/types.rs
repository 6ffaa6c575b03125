//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`IssueId`] - Validated issue identifier
//! - [`DepType`] - Dependency relationship label (never validated)
//!
//! # Validation
//!
//! Only [`IssueId`] is validated at construction time. Dependency labels are
//! accepted as-is: the classifier is total over arbitrary strings.
//!
//! # Examples
//!
//! ```
//! use molgate::core::types::{DepType, IssueId};
//!
//! let issue = IssueId::new("gt-mol.3").unwrap();
//! assert_eq!(issue.as_str(), "gt-mol.3");
//! assert_eq!(issue.ordinal(), 3);
//!
//! assert!(DepType::new("blocks").is_blocking());
//! assert!(!DepType::new("tracks").is_blocking());
//!
//! assert!(IssueId::new("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::classify;
use super::sequence::{self, Sequenced};

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid issue id: {0}")]
    InvalidIssueId(String),
}

/// A validated issue identifier.
///
/// Issue ids are opaque to this crate, but they must be usable as a lookup
/// key and as a single token on the command line:
/// - Cannot be empty
/// - Cannot contain whitespace
/// - Cannot contain ASCII control characters
///
/// # Example
///
/// ```
/// use molgate::core::types::IssueId;
///
/// let id = IssueId::new("gt-mol.12").unwrap();
/// assert_eq!(id.to_string(), "gt-mol.12");
///
/// assert!(IssueId::new("").is_err());
/// assert!(IssueId::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueId(String);

impl IssueId {
    /// Create a new validated issue id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidIssueId` if the id is empty or contains
    /// whitespace or control characters.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    fn validate(id: &str) -> Result<(), TypeError> {
        if id.is_empty() {
            return Err(TypeError::InvalidIssueId("issue id cannot be empty".into()));
        }

        if id.chars().any(char::is_whitespace) {
            return Err(TypeError::InvalidIssueId(format!(
                "issue id cannot contain whitespace: {id:?}"
            )));
        }

        if id.chars().any(|c| c.is_ascii_control()) {
            return Err(TypeError::InvalidIssueId(
                "issue id cannot contain control characters".into(),
            ));
        }

        Ok(())
    }

    /// Get the issue id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The step ordinal encoded after the last `.`.
    ///
    /// Returns [`sequence::UNPARSABLE_ORDINAL`] when there is no usable suffix.
    pub fn ordinal(&self) -> i64 {
        sequence::extract_ordinal(&self.0)
    }

    /// Whether the id carries a parsable step ordinal.
    pub fn has_ordinal(&self) -> bool {
        self.ordinal() != sequence::UNPARSABLE_ORDINAL
    }
}

impl TryFrom<String> for IssueId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<IssueId> for String {
    fn from(id: IssueId) -> Self {
        id.0
    }
}

impl AsRef<str> for IssueId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IssueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sequenced for IssueId {
    fn step_id(&self) -> &str {
        &self.0
    }
}

/// A dependency relationship label such as `blocks` or `parent-child`.
///
/// Any string is a valid label, including the empty string. Whether the
/// label gates progress is decided by [`classify::is_blocking`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepType(String);

impl DepType {
    /// Create a dependency label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether an edge with this label gates progress.
    pub fn is_blocking(&self) -> bool {
        classify::is_blocking(&self.0)
    }
}

impl From<&str> for DepType {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for DepType {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for DepType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DepType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
