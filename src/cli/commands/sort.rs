//! sort command - Order step identifiers by ordinal

use anyhow::{bail, Result};

use super::input;
use crate::cli::Context;
use crate::core::sequence::{is_sorted_by_ordinal, sort_ids_by_ordinal};
use crate::ui::output;

/// Sort identifiers from the arguments, or from stdin when none are given.
///
/// With `check`, prints nothing and fails if the input is out of order.
pub fn sort(ctx: &Context, ids: Vec<String>, check: bool) -> Result<()> {
    let mut ids = if ids.is_empty() {
        input::read_stdin_lines()?
    } else {
        ids
    };
    ctx.debug(format!("sorting {} identifiers", ids.len()));

    if check {
        if !is_sorted_by_ordinal(&ids) {
            bail!("identifiers are not in ordinal order");
        }
        return Ok(());
    }

    sort_ids_by_ordinal(&mut ids);

    if ctx.json() {
        return output::json(&ids);
    }

    for id in &ids {
        output::result(id);
    }
    Ok(())
}
