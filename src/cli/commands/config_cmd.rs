//! config command - Get, set, or list configuration values

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::config::{
    Config, GateDefaults, GlobalConfig, OutputFormat, ProjectConfig, CONFIG_ENV,
};
use crate::ui::output;

/// Keys understood by `mg config`.
pub(crate) const KEYS: &[&str] = &["format", "quiet", "gate.show_done"];

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .with_context(|| format!("Invalid value for {}: expected true or false", key))
}

fn parse_format(value: &str) -> Result<String> {
    let format: OutputFormat = value.parse()?;
    Ok(format.to_string())
}

/// Effective value of a key after precedence.
pub(crate) fn value_of(config: &Config, key: &str) -> Result<String> {
    let value = match key {
        "format" => config.format().to_string(),
        "quiet" => config.quiet().to_string(),
        "gate.show_done" => config.gate_show_done().to_string(),
        _ => bail!("Unknown configuration key: {}", key),
    };
    Ok(value)
}

pub(crate) fn apply_global(config: &mut GlobalConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "format" => config.format = Some(parse_format(value)?),
        "quiet" => config.quiet = Some(parse_bool(key, value)?),
        "gate.show_done" => {
            config.gate.get_or_insert_with(GateDefaults::default).show_done =
                Some(parse_bool(key, value)?)
        }
        _ => bail!("Unknown configuration key: {}", key),
    }
    Ok(())
}

pub(crate) fn apply_project(config: &mut ProjectConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "format" => config.format = Some(parse_format(value)?),
        "quiet" => bail!("'quiet' can only be set in the global config (use --global)"),
        "gate.show_done" => {
            config.gate.get_or_insert_with(GateDefaults::default).show_done =
                Some(parse_bool(key, value)?)
        }
        _ => bail!("Unknown configuration key: {}", key),
    }
    Ok(())
}

/// Where a global write goes: the file already loaded, else `$MOLGATE_CONFIG`,
/// else the canonical location.
fn global_write_path(config: &Config) -> Result<PathBuf> {
    if let Some(path) = config.global_config_loaded_from() {
        return Ok(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(Config::global_config_path()?)
}

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    output::result(value_of(&ctx.config, key)?);
    Ok(())
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str, global: bool) -> Result<()> {
    let path = if global {
        let mut config = ctx.config.global.clone();
        apply_global(&mut config, key, value)?;
        let path = global_write_path(&ctx.config)?;
        Config::write_global(&path, &config).context("Failed to write config")?;
        path
    } else {
        let mut config = ctx.config.project.clone().unwrap_or_default();
        apply_project(&mut config, key, value)?;
        Config::write_project(&ctx.cwd, &config).context("Failed to write config")?
    };

    ctx.debug(format!("wrote {}", path.display()));
    output::print(format!("Set {} = {}", key, value), ctx.verbosity);
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    if ctx.json() {
        let map: serde_json::Map<String, serde_json::Value> = KEYS
            .iter()
            .map(|key| {
                let value = value_of(&ctx.config, key)?;
                let value = match value.parse::<bool>() {
                    Ok(b) => serde_json::Value::Bool(b),
                    Err(_) => serde_json::Value::String(value),
                };
                Ok((key.to_string(), value))
            })
            .collect::<Result<_>>()?;
        return output::json(&map);
    }

    if let Some(path) = ctx.config.global_config_loaded_from() {
        output::print(format!("# global: {}", path.display()), ctx.verbosity);
    }
    if let Some(path) = ctx.config.project_config_loaded_from() {
        output::print(format!("# project: {}", path.display()), ctx.verbosity);
    }
    for key in KEYS {
        output::result(format!("{} = {}", key, value_of(&ctx.config, key)?));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(value_of(&config, "format").unwrap(), "text");
        assert_eq!(value_of(&config, "quiet").unwrap(), "false");
        assert_eq!(value_of(&config, "gate.show_done").unwrap(), "true");
        assert!(value_of(&config, "trunk").is_err());
    }

    #[test]
    fn apply_global_values() {
        let mut config = GlobalConfig::default();
        apply_global(&mut config, "format", "json").unwrap();
        apply_global(&mut config, "quiet", "true").unwrap();
        apply_global(&mut config, "gate.show_done", "false").unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.quiet, Some(true));
        assert_eq!(config.gate.and_then(|g| g.show_done), Some(false));
    }

    #[test]
    fn apply_rejects_bad_values() {
        let mut config = GlobalConfig::default();
        assert!(apply_global(&mut config, "format", "yaml").is_err());
        assert!(apply_global(&mut config, "quiet", "yes").is_err());
        assert!(apply_global(&mut config, "nope", "1").is_err());
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn quiet_is_global_only() {
        let mut config = ProjectConfig::default();
        assert!(apply_project(&mut config, "quiet", "true").is_err());
        apply_project(&mut config, "format", "json").unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn set_writes_project_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let ctx = Context {
            cwd: temp.path().to_path_buf(),
            verbosity: output::Verbosity::Quiet,
            ..Default::default()
        };

        set(&ctx, "gate.show_done", "false", false).unwrap();

        let loaded = Config::load_from(None, Some(temp.path())).unwrap();
        assert!(!loaded.gate_show_done());
    }
}
