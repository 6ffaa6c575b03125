//! core::sequence
//!
//! Step ordering for molecules.
//!
//! # Architecture
//!
//! A step identifier looks like `gt-mol.12`: an opaque prefix, a `.`
//! delimiter, and a decimal ordinal. Ordering is recovered from the ordinal
//! alone. Identifiers without a usable ordinal get [`UNPARSABLE_ORDINAL`],
//! which sorts after every real ordinal.
//!
//! # Invariants
//!
//! - Ordinal extraction is total and deterministic
//! - Sorting is stable: equal ordinals keep their input order, including
//!   several unparsable identifiers
//! - Sorting never allocates and never touches the sorted values
//!
//! # Example
//!
//! ```
//! use molgate::core::sequence::sort_ids_by_ordinal;
//!
//! let mut ids = vec!["gt-mol.3", "gt-mol.1", "gt-mol.bad", "gt-mol.2"];
//! sort_ids_by_ordinal(&mut ids);
//! assert_eq!(ids, vec!["gt-mol.1", "gt-mol.2", "gt-mol.3", "gt-mol.bad"]);
//! ```

/// Separator between an identifier's prefix and its ordinal.
pub const DELIMITER: char = '.';

/// Ordinal assigned to identifiers with no parsable suffix.
///
/// Larger than any real ordinal, so such identifiers sort last.
pub const UNPARSABLE_ORDINAL: i64 = i64::MAX;

/// Anything that exposes a step identifier.
pub trait Sequenced {
    /// The identifier whose suffix encodes this item's position.
    fn step_id(&self) -> &str;
}

impl Sequenced for str {
    fn step_id(&self) -> &str {
        self
    }
}

impl Sequenced for String {
    fn step_id(&self) -> &str {
        self
    }
}

impl<T: Sequenced + ?Sized> Sequenced for &T {
    fn step_id(&self) -> &str {
        (**self).step_id()
    }
}

impl<T: Sequenced + ?Sized> Sequenced for Box<T> {
    fn step_id(&self) -> &str {
        (**self).step_id()
    }
}

/// Extract the ordinal from a step identifier.
///
/// Reads the text after the last `.` as an unsigned decimal number. Returns
/// [`UNPARSABLE_ORDINAL`] when the delimiter is missing, nothing follows it,
/// or the suffix holds anything other than ASCII digits (signs and
/// whitespace included) or overflows. A signed suffix is unparsable, so
/// `m.-1` never sorts ahead of `m.0`.
///
/// # Example
///
/// ```
/// use molgate::core::sequence::{extract_ordinal, UNPARSABLE_ORDINAL};
///
/// assert_eq!(extract_ordinal("gt-mol.12"), 12);
/// assert_eq!(extract_ordinal("gt-mol.0"), 0);
/// assert_eq!(extract_ordinal("gt-mol."), UNPARSABLE_ORDINAL);
/// assert_eq!(extract_ordinal("gt-mol"), UNPARSABLE_ORDINAL);
/// assert_eq!(extract_ordinal("gt-mol.abc"), UNPARSABLE_ORDINAL);
/// ```
pub fn extract_ordinal(id: &str) -> i64 {
    let Some(idx) = id.rfind(DELIMITER) else {
        return UNPARSABLE_ORDINAL;
    };

    let suffix = &id[idx + DELIMITER.len_utf8()..];
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return UNPARSABLE_ORDINAL;
    }

    suffix.parse().unwrap_or(UNPARSABLE_ORDINAL)
}

/// Stable in-place sort by a caller-supplied ordinal key.
///
/// Both public sort entry points delegate here.
pub fn sort_by_ordinal_key<T, F>(items: &mut [T], mut key: F)
where
    F: FnMut(&T) -> &str,
{
    // `sort_by_key` is stable.
    items.sort_by_key(|item| extract_ordinal(key(item)));
}

/// Sort raw step identifiers ascending by ordinal.
pub fn sort_ids_by_ordinal<S: AsRef<str>>(ids: &mut [S]) {
    sort_by_ordinal_key(ids, |id| id.as_ref());
}

/// Sort identifier-bearing steps ascending by ordinal.
///
/// The steps themselves are moved, never cloned or mutated.
pub fn sort_steps_by_ordinal<T: Sequenced>(steps: &mut [T]) {
    sort_by_ordinal_key(steps, |step| step.step_id());
}

/// Whether identifiers are already in ascending ordinal order.
pub fn is_sorted_by_ordinal<S: AsRef<str>>(ids: &[S]) -> bool {
    ids.windows(2)
        .all(|pair| extract_ordinal(pair[0].as_ref()) <= extract_ordinal(pair[1].as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod extract {
        use super::*;

        #[test]
        fn numeric_suffix() {
            assert_eq!(extract_ordinal("gt-mol.12"), 12);
            assert_eq!(extract_ordinal("gt-mol.0"), 0);
            assert_eq!(extract_ordinal("gt-mol.007"), 7);
        }

        #[test]
        fn uses_last_delimiter() {
            assert_eq!(extract_ordinal("a.5.9"), 9);
            assert_eq!(extract_ordinal("gt-mol.3.bad"), UNPARSABLE_ORDINAL);
        }

        #[test]
        fn prefix_is_opaque() {
            assert_eq!(extract_ordinal(".4"), 4);
            assert_eq!(extract_ordinal("weird prefix!.4"), 4);
        }

        #[test]
        fn trailing_delimiter() {
            assert_eq!(extract_ordinal("gt-mol."), UNPARSABLE_ORDINAL);
            assert_eq!(extract_ordinal("."), UNPARSABLE_ORDINAL);
        }

        #[test]
        fn missing_delimiter() {
            assert_eq!(extract_ordinal("gt-mol"), UNPARSABLE_ORDINAL);
            assert_eq!(extract_ordinal(""), UNPARSABLE_ORDINAL);
            assert_eq!(extract_ordinal("12"), UNPARSABLE_ORDINAL);
        }

        #[test]
        fn non_decimal_suffix() {
            assert_eq!(extract_ordinal("gt-mol.abc"), UNPARSABLE_ORDINAL);
            assert_eq!(extract_ordinal("gt-mol.1a"), UNPARSABLE_ORDINAL);
            assert_eq!(extract_ordinal("gt-mol.0x1f"), UNPARSABLE_ORDINAL);
            assert_eq!(extract_ordinal("gt-mol.1.5e2"), UNPARSABLE_ORDINAL);
            assert_eq!(extract_ordinal("gt-mol.١٢"), UNPARSABLE_ORDINAL);
        }

        #[test]
        fn signs_rejected() {
            assert_eq!(extract_ordinal("gt-mol.+3"), UNPARSABLE_ORDINAL);
            assert_eq!(extract_ordinal("gt-mol.-3"), UNPARSABLE_ORDINAL);

            let mut ids = vec!["m.-1", "m.0"];
            sort_ids_by_ordinal(&mut ids);
            assert_eq!(ids, vec!["m.0", "m.-1"]);
        }

        #[test]
        fn whitespace_rejected() {
            assert_eq!(extract_ordinal("gt-mol. 3"), UNPARSABLE_ORDINAL);
            assert_eq!(extract_ordinal("gt-mol.3 "), UNPARSABLE_ORDINAL);
            assert_eq!(extract_ordinal("gt-mol.3\n"), UNPARSABLE_ORDINAL);
        }

        #[test]
        fn overflow_is_sentinel() {
            assert_eq!(
                extract_ordinal("gt-mol.9223372036854775807"),
                UNPARSABLE_ORDINAL
            );
            assert_eq!(
                extract_ordinal("gt-mol.9223372036854775808"),
                UNPARSABLE_ORDINAL
            );
            assert_eq!(
                extract_ordinal("gt-mol.9223372036854775806"),
                UNPARSABLE_ORDINAL - 1
            );
        }
    }

    mod sort {
        use super::*;

        #[derive(Debug, PartialEq)]
        struct Step {
            id: String,
            title: &'static str,
        }

        impl Sequenced for Step {
            fn step_id(&self) -> &str {
                &self.id
            }
        }

        fn step(id: &str, title: &'static str) -> Step {
            Step {
                id: id.to_string(),
                title,
            }
        }

        #[test]
        fn ids_ascending_with_bad_last() {
            let mut ids = vec!["gt-mol.3", "gt-mol.1", "gt-mol.bad", "gt-mol.2"];
            sort_ids_by_ordinal(&mut ids);
            assert_eq!(ids, vec!["gt-mol.1", "gt-mol.2", "gt-mol.3", "gt-mol.bad"]);
        }

        #[test]
        fn numeric_not_lexicographic() {
            let mut ids = vec!["m.10".to_string(), "m.9".to_string(), "m.100".to_string()];
            sort_ids_by_ordinal(&mut ids);
            assert_eq!(ids, vec!["m.9", "m.10", "m.100"]);
        }

        #[test]
        fn equal_ordinals_keep_input_order() {
            let mut ids = vec!["z.bad", "y.5", "w.bad2", "x.5", "a.1"];
            sort_ids_by_ordinal(&mut ids);
            assert_eq!(ids, vec!["a.1", "y.5", "x.5", "z.bad", "w.bad2"]);
        }

        #[test]
        fn sorting_is_idempotent() {
            let mut ids = vec!["m.2", "m.x", "m.1", "n.1", "m"];
            sort_ids_by_ordinal(&mut ids);
            let once = ids.clone();
            sort_ids_by_ordinal(&mut ids);
            assert_eq!(ids, once);
        }

        #[test]
        fn empty_and_single() {
            let mut empty: Vec<&str> = vec![];
            sort_ids_by_ordinal(&mut empty);
            assert!(empty.is_empty());

            let mut single = vec!["m.bad"];
            sort_ids_by_ordinal(&mut single);
            assert_eq!(single, vec!["m.bad"]);
        }

        #[test]
        fn steps_move_without_mutation() {
            let mut steps = vec![
                step("gt-mol.2", "second"),
                step("gt-mol", "root"),
                step("gt-mol.1", "first"),
            ];
            sort_steps_by_ordinal(&mut steps);
            assert_eq!(
                steps,
                vec![
                    step("gt-mol.1", "first"),
                    step("gt-mol.2", "second"),
                    step("gt-mol", "root"),
                ]
            );
        }

        #[test]
        fn steps_by_reference() {
            let a = step("m.2", "a");
            let b = step("m.1", "b");
            let mut refs = vec![&a, &b];
            sort_steps_by_ordinal(&mut refs);
            assert_eq!(refs[0].title, "b");
            assert_eq!(refs[1].title, "a");
        }

        #[test]
        fn sorted_predicate() {
            assert!(is_sorted_by_ordinal::<&str>(&[]));
            assert!(is_sorted_by_ordinal(&["m.1", "m.1", "m.2", "m.bad", "m"]));
            assert!(!is_sorted_by_ordinal(&["m.bad", "m.1"]));
            assert!(!is_sorted_by_ordinal(&["m.10", "m.9"]));
        }
    }
}
