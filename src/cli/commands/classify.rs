//! classify command - Report blocking verdicts for dependency types

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::core::classify::{classify as verdict_for, Gating};
use crate::ui::output;

/// One classified dependency type.
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct Verdict<'a> {
    #[serde(rename = "type")]
    pub dep_type: &'a str,
    pub gating: Gating,
}

pub(crate) fn verdicts(types: &[String]) -> Vec<Verdict<'_>> {
    types
        .iter()
        .map(|t| Verdict {
            dep_type: t,
            gating: verdict_for(t),
        })
        .collect()
}

/// Show the empty label visibly in text output.
pub(crate) fn display_label(label: &str) -> &str {
    if label.is_empty() {
        "\"\""
    } else {
        label
    }
}

/// Print `TYPE<TAB>blocking|non-blocking` for each type.
pub fn classify(ctx: &Context, types: &[String]) -> Result<()> {
    let verdicts = verdicts(types);
    ctx.debug(format!("classified {} dependency types", verdicts.len()));

    if ctx.json() {
        return output::json(&verdicts);
    }

    for v in &verdicts {
        output::result(output::columns(&[&display_label(v.dep_type), &v.gating]));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts_in_argument_order() {
        let types = vec!["tracks".to_string(), "blocks".to_string(), String::new()];
        let got = verdicts(&types);
        assert_eq!(
            got,
            vec![
                Verdict {
                    dep_type: "tracks",
                    gating: Gating::NonBlocking
                },
                Verdict {
                    dep_type: "blocks",
                    gating: Gating::Blocking
                },
                Verdict {
                    dep_type: "",
                    gating: Gating::Blocking
                },
            ]
        );
    }

    #[test]
    fn json_shape() {
        let types = vec!["relates-to".to_string()];
        let json = serde_json::to_value(verdicts(&types)).unwrap();
        assert_eq!(json[0]["type"], "relates-to");
        assert_eq!(json[0]["gating"], "non-blocking");
    }

    #[test]
    fn empty_label_is_visible() {
        assert_eq!(display_label(""), "\"\"");
        assert_eq!(display_label("needs"), "needs");
    }
}
