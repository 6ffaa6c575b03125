//! cli
//!
//! Command-line interface layer for molgate.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and merge it with flags into a [`Context`]
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers read input, call into [`crate::core`] and
//! [`crate::molecule`], and format results through [`crate::ui::output`].
//! Classification and ordering policy never lives here.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::core::config::{Config, OutputFormat};
use crate::ui::output::{self, Verbosity};

/// Execution context for commands.
///
/// Global settings derived from CLI flags and configuration.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory relative paths are resolved against.
    pub cwd: PathBuf,
    /// Output verbosity.
    pub verbosity: Verbosity,
    /// Result format.
    pub format: OutputFormat,
    /// Loaded configuration.
    pub config: Config,
}

impl Context {
    /// Resolve a user-supplied path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn debug(&self, message: impl std::fmt::Display) {
        output::debug(message, self.verbosity);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cwd: PathBuf::from("."),
            verbosity: Verbosity::Normal,
            format: OutputFormat::Text,
            config: Config::default(),
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let cwd = match cli.cwd.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let config = Config::load(Some(&cwd)).context("Failed to load configuration")?;

    // CLI flags always take precedence over config defaults.
    let verbosity = Verbosity::from_flags(cli.quiet || config.quiet(), cli.debug);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.format()
    };

    if let Some(path) = config.global_config_loaded_from() {
        output::debug(format!("global config: {}", path.display()), verbosity);
    }
    if let Some(path) = config.project_config_loaded_from() {
        output::debug(format!("project config: {}", path.display()), verbosity);
    }

    let ctx = Context {
        cwd,
        verbosity,
        format,
        config,
    };

    commands::dispatch(cli.command, &ctx)
}
