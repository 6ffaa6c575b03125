//! gate command - Show which molecule steps may start

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use super::input;
use crate::cli::Context;
use crate::molecule::{Progress, StepGate, StepProgress};
use crate::ui::output;

#[derive(Debug, Serialize)]
struct GateReport<'a> {
    steps: Vec<&'a StepProgress<'a>>,
    next: Option<&'a str>,
    done: usize,
    total: usize,
    complete: bool,
}

#[derive(Debug, Serialize)]
struct NextReport<'a> {
    next: Option<&'a str>,
}

/// Visible rows of the report.
fn visible<'p, 'a>(
    progress: &'p Progress<'a>,
    show_done: bool,
) -> impl Iterator<Item = &'p StepProgress<'a>> {
    progress
        .steps()
        .iter()
        .filter(move |p| show_done || !p.gate.is_done())
}

pub(crate) fn render_text(progress: &Progress<'_>, show_done: bool) -> Vec<String> {
    visible(progress, show_done)
        .map(|p| match &p.gate {
            StepGate::Blocked { by } => {
                let by = by.iter().map(|i| i.as_str()).collect::<Vec<_>>().join(",");
                output::columns(&[&p.step.id, &p.gate.label(), &by])
            }
            gate => output::columns(&[&p.step.id, &gate.label()]),
        })
        .collect()
}

pub(crate) fn summary(progress: &Progress<'_>) -> String {
    let head = format!("{}/{} steps done", progress.done_count(), progress.total());
    match progress.next_ready() {
        Some(step) => format!("{}, next: {}", head, step.id),
        None if progress.is_complete() => format!("{}, molecule complete", head),
        None => format!("{}, nothing ready", head),
    }
}

/// Print per-step readiness, or only the next ready step.
pub fn gate(ctx: &Context, file: Option<&Path>, next: bool, hide_done: bool) -> Result<()> {
    let molecule = input::read_molecule(ctx, file)?;
    let progress = molecule.progress();
    let next_id = progress.next_ready().map(|s| s.id.as_str());
    ctx.debug(format!(
        "{} ready, {} done, {} total",
        progress.ready().count(),
        progress.done_count(),
        progress.total()
    ));

    if next {
        if ctx.json() {
            return output::json(&NextReport { next: next_id });
        }
        if let Some(id) = next_id {
            output::result(id);
        }
        return Ok(());
    }

    let show_done = !hide_done && ctx.config.gate_show_done();

    if ctx.json() {
        return output::json(&GateReport {
            steps: visible(&progress, show_done).collect(),
            next: next_id,
            done: progress.done_count(),
            total: progress.total(),
            complete: progress.is_complete(),
        });
    }

    for line in render_text(&progress, show_done) {
        output::result(line);
    }
    output::print(summary(&progress), ctx.verbosity);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::Molecule;

    const MOLECULE: &str = r#"[
        {"id": "gt-mol.3", "status": "open",
         "dependencies": [{"depends_on_id": "gt-mol.2", "type": "blocks"},
                          {"depends_on_id": "ext-1", "type": "needs"}]},
        {"id": "gt-mol.1", "status": "closed"},
        {"id": "gt-mol.2", "status": "open",
         "dependencies": [{"depends_on_id": "gt-mol", "type": "parent-child"},
                          {"depends_on_id": "gt-mol.1", "type": "blocks"}]}
    ]"#;

    #[test]
    fn text_report() {
        let molecule = Molecule::from_json(MOLECULE).unwrap();
        let progress = molecule.progress();
        assert_eq!(
            render_text(&progress, true),
            vec![
                "gt-mol.1\tdone",
                "gt-mol.2\tready",
                "gt-mol.3\tblocked\tgt-mol.2,ext-1",
            ]
        );
        assert_eq!(summary(&progress), "1/3 steps done, next: gt-mol.2");
    }

    #[test]
    fn hide_done_rows() {
        let molecule = Molecule::from_json(MOLECULE).unwrap();
        let progress = molecule.progress();
        let lines = render_text(&progress, false);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| !l.starts_with("gt-mol.1")));
    }

    #[test]
    fn summary_variants() {
        let done = Molecule::from_json(r#"[{"id": "m.1", "status": "closed"}]"#).unwrap();
        assert_eq!(summary(&done.progress()), "1/1 steps done, molecule complete");

        let stuck = Molecule::from_json(
            r#"[{"id": "m.1", "dependencies": [{"depends_on_id": "x", "type": "blocks"}]}]"#,
        )
        .unwrap();
        assert_eq!(summary(&stuck.progress()), "0/1 steps done, nothing ready");
    }
}
