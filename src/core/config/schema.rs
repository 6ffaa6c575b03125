//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$MOLGATE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/molgate/config.toml`
//! 3. `~/.molgate/config.toml` (canonical write location)
//!
//! # Project Config
//!
//! Located at `.molgate/config.toml` in the working directory.
//!
//! # Validation
//!
//! Config values are validated after parsing so that a typo such as
//! `format = "jsn"` fails at load time instead of silently falling back.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Output formats understood by the CLI.
pub const VALID_FORMATS: &[&str] = &["text", "json"];

fn validate_format(format: &Option<String>) -> Result<(), ConfigError> {
    if let Some(format) = format {
        if !VALID_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "invalid format '{}', must be one of: {}",
                format,
                VALID_FORMATS.join(", ")
            )));
        }
    }
    Ok(())
}

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// format = "text"
/// quiet = false
///
/// [gate]
/// show_done = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default output format ("text" or "json")
    pub format: Option<String>,

    /// Suppress non-essential output by default
    pub quiet: Option<bool>,

    /// Gate report defaults
    pub gate: Option<GateDefaults>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_format(&self.format)
    }
}

/// Project configuration.
///
/// # Example
///
/// ```toml
/// format = "json"
///
/// [gate]
/// show_done = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Output format override for this project
    pub format: Option<String>,

    /// Gate report overrides
    pub gate: Option<GateDefaults>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_format(&self.format)
    }
}

/// `mg gate` defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GateDefaults {
    /// List closed steps in the readiness report
    pub show_done: Option<bool>,
}
