//! Classification matrix for dependency types.
//!
//! Every label the host is known to emit, plus the near misses that must
//! not slip through as informational.
//!
//! # Test Categories
//!
//! 1. **Informational** - The closed allow-list
//! 2. **Blocking** - Explicit gating types
//! 3. **Near misses** - Case, whitespace, and spelling variants of listed types
//! 4. **Degenerate** - Empty and unknown labels

use molgate::core::classify::{classify, is_blocking, Gating, NON_BLOCKING_DEP_TYPES};
use molgate::core::types::DepType;

// =============================================================================
// Matrix
// =============================================================================

const MATRIX: &[(&str, Gating)] = &[
    // Informational
    ("parent-child", Gating::NonBlocking),
    ("tracks", Gating::NonBlocking),
    ("related", Gating::NonBlocking),
    ("discovered-from", Gating::NonBlocking),
    ("caused-by", Gating::NonBlocking),
    ("validates", Gating::NonBlocking),
    ("relates-to", Gating::NonBlocking),
    ("supersedes", Gating::NonBlocking),
    // Blocking
    ("blocks", Gating::Blocking),
    ("needs", Gating::Blocking),
    ("conditional-blocks", Gating::Blocking),
    ("waits-for", Gating::Blocking),
    // Near misses
    ("Parent-Child", Gating::Blocking),
    ("TRACKS", Gating::Blocking),
    ("Related", Gating::Blocking),
    ("parent_child", Gating::Blocking),
    ("relates_to", Gating::Blocking),
    ("discovered_from", Gating::Blocking),
    ("caused by", Gating::Blocking),
    (" tracks", Gating::Blocking),
    ("tracks ", Gating::Blocking),
    ("tracks\n", Gating::Blocking),
    ("relate", Gating::Blocking),
    ("superseded", Gating::Blocking),
    ("supersedes-by", Gating::Blocking),
    // Degenerate
    ("", Gating::Blocking),
    (" ", Gating::Blocking),
    ("unknown-type", Gating::Blocking),
    ("-", Gating::Blocking),
];

#[test]
fn matrix() {
    for (label, expected) in MATRIX {
        assert_eq!(classify(label), *expected, "label {label:?}");
        assert_eq!(is_blocking(label), expected.is_blocking(), "label {label:?}");
        assert_eq!(
            DepType::from(*label).is_blocking(),
            expected.is_blocking(),
            "label {label:?}"
        );
    }
}

#[test]
fn matrix_covers_every_listed_type() {
    for listed in NON_BLOCKING_DEP_TYPES {
        assert!(
            MATRIX
                .iter()
                .any(|(label, g)| label == listed && *g == Gating::NonBlocking),
            "{listed} missing from matrix"
        );
    }
}

#[test]
fn allow_list_is_closed() {
    assert_eq!(NON_BLOCKING_DEP_TYPES.len(), 8);
    let informational = MATRIX
        .iter()
        .filter(|(_, g)| *g == Gating::NonBlocking)
        .count();
    assert_eq!(informational, NON_BLOCKING_DEP_TYPES.len());
}
