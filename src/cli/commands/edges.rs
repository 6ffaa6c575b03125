//! edges command - Partition dependency edges by verdict

use std::path::Path;

use anyhow::{Context as _, Result};

use super::classify::display_label;
use super::input;
use crate::cli::Context;
use crate::core::classify::{partition_edges, Gating, Partitioned};
use crate::molecule::Dependency;
use crate::ui::output;

/// Parse a JSON array of dependencies and split it.
pub(crate) fn partition_json(json: &str, source: &str) -> Result<Partitioned<Dependency>> {
    let edges: Vec<Dependency> = serde_json::from_str(json)
        .with_context(|| format!("Failed to parse dependencies from {}", source))?;
    Ok(partition_edges(edges))
}

/// Text rendering: blocking edges first, then informational ones.
pub(crate) fn render_text(split: &Partitioned<Dependency>) -> Vec<String> {
    let blocking = split.blocking.iter().map(|d| (Gating::Blocking, d));
    let informational = split.non_blocking.iter().map(|d| (Gating::NonBlocking, d));
    blocking
        .chain(informational)
        .map(|(gating, dep)| {
            output::columns(&[
                &gating,
                &dep.depends_on_id,
                &display_label(dep.dep_type.as_str()),
            ])
        })
        .collect()
}

/// Print dependencies grouped by verdict.
pub fn edges(ctx: &Context, file: Option<&Path>) -> Result<()> {
    let raw = input::read_to_string(ctx, file)?;
    let split = partition_json(&raw, &input::source_name(file))?;
    ctx.debug(format!(
        "{} blocking, {} non-blocking",
        split.blocking.len(),
        split.non_blocking.len()
    ));

    if ctx.json() {
        return output::json(&split);
    }

    for line in render_text(&split) {
        output::result(line);
    }
    Ok(())
}
