//! Configuration loading and validation for the stringify CLI.
//!
//! Loads configuration from `~/.stringify/config.toml` with environment
//! variable overrides. Validates selector specs at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stringify_core::SelectorSpec;

/// The root configuration structure.
///
/// Maps directly to `~/.stringify/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StringifyConfig {
    /// Separator placed between joined elements
    #[serde(default)]
    pub separator: String,

    /// Selector specs applied when none are given on the command line
    #[serde(default)]
    pub selectors: Vec<String>,

    /// How input lines are prepared before joining
    #[serde(default)]
    pub input: InputConfig,

    /// How the joined result is written
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Trim whitespace around each line
    #[serde(default)]
    pub trim: bool,

    /// Drop lines that are empty (after trimming, if enabled)
    #[serde(default)]
    pub skip_empty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub trailing_newline: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            trailing_newline: true,
        }
    }
}

impl StringifyConfig {
    /// Load configuration from the default path (~/.stringify/config.toml).
    ///
    /// `STRINGIFY_CONFIG` points at a different file. Afterwards these
    /// environment variables override file values:
    /// - `STRINGIFY_SEPARATOR` (escapes as in [`unescape`])
    /// - `STRINGIFY_SELECTORS` (comma-separated specs, see
    ///   [`SelectorSpec::split_list`])
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let mut config = Self::load_from(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides looked up by variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(separator) = lookup("STRINGIFY_SEPARATOR") {
            tracing::debug!(%separator, "separator overridden from environment");
            self.separator = unescape(&separator);
        }

        if let Some(selectors) = lookup("STRINGIFY_SELECTORS") {
            tracing::debug!(%selectors, "selectors overridden from environment");
            self.selectors = SelectorSpec::split_list(&selectors);
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".stringify")
    }

    /// Get the configuration file path, honoring `STRINGIFY_CONFIG`.
    pub fn config_path() -> PathBuf {
        std::env::var("STRINGIFY_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::config_dir().join("config.toml"))
    }

    /// Parse the configured selector specs.
    pub fn selector_specs(&self) -> Result<Vec<SelectorSpec>, ConfigError> {
        self.selectors
            .iter()
            .map(|spec| {
                spec.parse::<SelectorSpec>().map_err(|e| {
                    ConfigError::ValidationError(format!("invalid selector spec '{spec}': {e}"))
                })
            })
            .collect()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.selector_specs()?;
        Ok(())
    }

    /// Generate a default config TOML string (for `config init`).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Expand `\n`, `\t`, `\0` and `\\` in a separator typed on a command line
/// or in the environment. Other backslashes are kept as written.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
