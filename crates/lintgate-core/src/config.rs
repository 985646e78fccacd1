//! Configuration types for lintgate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default recognized source extension.
pub const DEFAULT_EXTENSION: &str = "cs";

/// Default ignore-list file name.
pub const DEFAULT_IGNORE_FILE: &str = "StyleCop.ignore";

/// Default engine settings file name, looked up next to the executable.
pub const DEFAULT_SETTINGS_FILE: &str = "Settings.StyleCop";

/// Default engine command.
pub const DEFAULT_ENGINE_COMMAND: &str = "stylecop-cli";

/// Top-level configuration for lintgate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recognized source extension, without the dot (compared case-insensitively).
    pub extension: String,

    /// Name of the ignore-list file searched for above the target files.
    pub ignore_file: String,

    /// Name of the engine settings file expected next to the executable.
    pub settings_file: String,

    /// How to run the analysis engine.
    pub engine: EngineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
            settings_file: DEFAULT_SETTINGS_FILE.to_string(),
            engine: EngineConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns true if `path` ends with the recognized extension.
    #[must_use]
    pub fn has_extension(&self, path: &str) -> bool {
        has_extension(path, &self.extension)
    }
}

/// Case-insensitive extension check on a string path.
///
/// The extension is whatever follows the last `.` of the final path segment,
/// so a file named just `.cs` has extension `cs`.
#[must_use]
pub fn has_extension(path: &str, extension: &str) -> bool {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    name.rfind('.').is_some_and(|dot| {
        name[dot + 1..].eq_ignore_ascii_case(extension.trim_start_matches('.'))
    })
}

/// Analysis engine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Program to run.
    pub command: PathBuf,

    /// Arguments placed before the generated ones.
    pub args: Vec<String>,

    /// Exit codes that count as a completed run.
    pub success_codes: Vec<i32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: PathBuf::from(DEFAULT_ENGINE_COMMAND),
            args: Vec::new(),
            success_codes: vec![0],
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(lintgate::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(code(lintgate::config::parse))]
    Parse {
        /// Parse error message.
        message: String,
    },
}
