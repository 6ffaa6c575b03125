//! steps command - List a molecule's steps in order

use std::path::Path;

use anyhow::Result;

use super::input;
use crate::cli::Context;
use crate::molecule::Issue;
use crate::ui::output;

pub(crate) fn render_text(steps: &[Issue]) -> Vec<String> {
    steps
        .iter()
        .map(|s| output::columns(&[&s.id, &s.status, &s.title]))
        .collect()
}

/// Print `ID<TAB>STATUS<TAB>TITLE` for each step, in ordinal order.
pub fn steps(ctx: &Context, file: Option<&Path>) -> Result<()> {
    let molecule = input::read_molecule(ctx, file)?;

    if ctx.json() {
        return output::json(molecule.steps());
    }

    for line in render_text(molecule.steps()) {
        output::result(line);
    }
    Ok(())
}
