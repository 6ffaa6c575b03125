//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! molgate has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Overrides for one working directory
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$MOLGATE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/molgate/config.toml`
//! 3. `~/.molgate/config.toml` (canonical write location)
//!
//! # Project Config Location
//!
//! `.molgate/config.toml` in the working directory.
//!
//! # Example
//!
//! ```no_run
//! use molgate::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/project"))).unwrap();
//!
//! println!("Format: {}", config.format());
//! println!("Show done steps: {}", config.gate_show_done());
//! ```

pub mod schema;

pub use schema::{GateDefaults, GlobalConfig, ProjectConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV: &str = "MOLGATE_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable, tab-separated text.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "invalid format '{}', must be one of: {}",
                other,
                schema::VALID_FORMATS.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence rules: project config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Project configuration (if present)
    pub project: Option<ProjectConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also loads project config from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(project_dir: Option<&Path>) -> Result<Config, ConfigError> {
        let global_path = Self::find_global();
        Self::load_from(global_path.as_deref(), project_dir)
    }

    /// Load configuration from an explicit global config path.
    ///
    /// A `global_path` that does not exist yields global defaults.
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<Config, ConfigError> {
        let (global, global_path) = match global_path {
            Some(path) if path.exists() => {
                (Self::read_config::<GlobalConfig>(path)?, Some(path.to_path_buf()))
            }
            _ => (GlobalConfig::default(), None),
        };

        let (project, project_path) = match project_dir {
            Some(dir) => Self::load_project(dir)?,
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        Ok(Config {
            global,
            project,
            global_path,
            project_path,
        })
    }

    /// Locate the global config file from the standard locations.
    fn find_global() -> Option<PathBuf> {
        // 1. $MOLGATE_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. $XDG_CONFIG_HOME/molgate/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("molgate/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. ~/.molgate/config.toml
        dirs::home_dir()
            .map(|home| home.join(".molgate/config.toml"))
            .filter(|path| path.exists())
    }

    /// Load project configuration, if present.
    fn load_project(
        project_dir: &Path,
    ) -> Result<(Option<ProjectConfig>, Option<PathBuf>), ConfigError> {
        let path = Self::project_config_path(project_dir);
        if !path.exists() {
            return Ok((None, None));
        }
        let config = Self::read_config(&path)?;
        Ok((Some(config), Some(path)))
    }

    /// Read and parse a config file.
    fn read_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.molgate/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".molgate/config.toml"))
    }

    /// Get the canonical path for project config.
    pub fn project_config_path(project_dir: &Path) -> PathBuf {
        project_dir.join(".molgate/config.toml")
    }

    /// Write global config atomically to `path`.
    pub fn write_global(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        config.validate()?;
        Self::write_config_atomic(path, config)
    }

    /// Write project config atomically.
    ///
    /// Creates `.molgate/` if needed.
    pub fn write_project(
        project_dir: &Path,
        config: &ProjectConfig,
    ) -> Result<PathBuf, ConfigError> {
        config.validate()?;
        let path = Self::project_config_path(project_dir);
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write a config file atomically (temp file in the same directory, then rename).
    fn write_config_atomic<T: serde::Serialize>(
        path: &Path,
        config: &T,
    ) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the output format.
    ///
    /// Defaults to text if not configured. Values were validated at load time.
    pub fn format(&self) -> OutputFormat {
        self.project
            .as_ref()
            .and_then(|p| p.format.as_deref())
            .or(self.global.format.as_deref())
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    /// Check if quiet mode is enabled by default.
    ///
    /// Defaults to `false` if not configured.
    pub fn quiet(&self) -> bool {
        self.global.quiet.unwrap_or(false)
    }

    /// Check if `mg gate` should list closed steps.
    ///
    /// Defaults to `true` if not configured.
    pub fn gate_show_done(&self) -> bool {
        let project = self
            .project
            .as_ref()
            .and_then(|p| p.gate.as_ref())
            .and_then(|g| g.show_done);
        let global = self.global.gate.as_ref().and_then(|g| g.show_done);
        project.or(global).unwrap_or(true)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
