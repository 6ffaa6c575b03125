//! Shared input handling: files, `-`, and stdin.

use std::io::{self, BufRead, Read};
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::molecule::Molecule;
use crate::ui::output;

/// Whether a path argument means "read stdin".
pub(crate) fn is_stdin(file: Option<&Path>) -> bool {
    file.map_or(true, |p| p.as_os_str() == "-")
}

/// Human-readable name for an input source.
pub(crate) fn source_name(file: Option<&Path>) -> String {
    match file {
        Some(p) if !is_stdin(Some(p)) => p.display().to_string(),
        _ => "stdin".to_string(),
    }
}

/// Read a whole input source into a string.
pub(crate) fn read_to_string(ctx: &Context, file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if !is_stdin(file) => {
            let path = ctx.resolve(path);
            ctx.debug(format!("reading {}", path.display()));
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            ctx.debug("reading stdin");
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .context("Failed to read stdin")?;
            Ok(contents)
        }
    }
}

/// Read non-empty lines from stdin.
pub(crate) fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Load a molecule from a file or stdin.
pub(crate) fn read_molecule(ctx: &Context, file: Option<&Path>) -> Result<Molecule> {
    let molecule = match file {
        Some(path) if !is_stdin(file) => Molecule::from_path(&ctx.resolve(path))?,
        _ => {
            ctx.debug("reading molecule from stdin");
            Molecule::from_reader(io::stdin().lock(), "stdin")?
        }
    };
    ctx.debug(format!(
        "loaded {} steps from {}",
        molecule.len(),
        source_name(file)
    ));
    for step in molecule.steps().iter().filter(|s| !s.id.has_ordinal()) {
        output::warn(
            format!("step {} has no ordinal suffix, ordered last", step.id),
            ctx.verbosity,
        );
    }
    Ok(molecule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_and_none_mean_stdin() {
        assert!(is_stdin(None));
        assert!(is_stdin(Some(Path::new("-"))));
        assert!(!is_stdin(Some(Path::new("mol.json"))));
    }

    #[test]
    fn source_names() {
        assert_eq!(source_name(None), "stdin");
        assert_eq!(source_name(Some(Path::new("-"))), "stdin");
        assert_eq!(source_name(Some(Path::new("a.json"))), "a.json");
    }

    #[test]
    fn read_file_relative_to_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("mol.json"), r#"[{"id": "m.2"}, {"id": "m.1"}]"#)
            .unwrap();
        let ctx = Context {
            cwd: temp.path().to_path_buf(),
            ..Default::default()
        };

        let molecule = read_molecule(&ctx, Some(Path::new("mol.json"))).unwrap();
        assert_eq!(molecule.steps()[0].id.as_str(), "m.1");

        let raw = read_to_string(&ctx, Some(Path::new("mol.json"))).unwrap();
        assert!(raw.contains("m.2"));
    }

    #[test]
    fn missing_file_errors() {
        let temp = tempfile::TempDir::new().unwrap();
        let ctx = Context {
            cwd: temp.path().to_path_buf(),
            ..Default::default()
        };
        assert!(read_molecule(&ctx, Some(Path::new("nope.json"))).is_err());
        assert!(read_to_string(&ctx, Some(Path::new("nope.json"))).is_err());
    }
}
