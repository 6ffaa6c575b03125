//! ordinal command - Print the ordinal of step identifiers

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::core::sequence::{extract_ordinal, UNPARSABLE_ORDINAL};
use crate::ui::output;

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct OrdinalRow<'a> {
    pub id: &'a str,
    /// `None` when the identifier has no parsable ordinal.
    pub ordinal: Option<i64>,
}

pub(crate) fn rows(ids: &[String]) -> Vec<OrdinalRow<'_>> {
    ids.iter()
        .map(|id| {
            let n = extract_ordinal(id);
            OrdinalRow {
                id,
                ordinal: (n != UNPARSABLE_ORDINAL).then_some(n),
            }
        })
        .collect()
}

/// Print `ID<TAB>N`, or `ID<TAB>-` when there is no ordinal.
pub fn ordinal(ctx: &Context, ids: &[String]) -> Result<()> {
    let rows = rows(ids);

    if ctx.json() {
        return output::json(&rows);
    }

    for row in &rows {
        let shown = row
            .ordinal
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        output::result(output::columns(&[&row.id, &shown]));
    }
    Ok(())
}
