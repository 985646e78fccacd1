//! Configuration and settings file resolution.
//!
//! The tool configuration is resolved in a fixed priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `lintgate.toml` next to the running executable
//! 3. `~/.lintgate/config.toml` (global fallback)
//! 4. No config found → defaults
//!
//! The engine settings file is looked up next to the executable only, unless
//! `--settings` names one.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found beside the executable.
    Local(PathBuf),
    /// Loaded from the global config directory (`~/.lintgate/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Local(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Config file name expected next to the executable.
const LOCAL_CONFIG_NAME: &str = "lintgate.toml";

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(explicit, exe_dir(), global_config_dir())
}

/// Testable core: accepts both directories as parameters to avoid env var races.
fn resolve_inner(
    explicit: Option<&Path>,
    exe_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(dir) = exe_dir {
        let candidate = dir.join(LOCAL_CONFIG_NAME);
        if candidate.is_file() {
            tracing::debug!("Found local config: {}", candidate.display());
            return ConfigSource::Local(candidate);
        }
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.is_file() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// Resolves the engine settings file.
///
/// An explicit path must exist. Otherwise `file_name` next to the executable
/// is used if present, and `None` means the engine falls back to its own
/// defaults.
///
/// # Errors
///
/// Returns an error if `explicit` does not name an existing file.
pub fn resolve_settings(explicit: Option<&Path>, file_name: &str) -> Result<Option<PathBuf>> {
    resolve_settings_inner(explicit, exe_dir(), file_name)
}

fn resolve_settings_inner(
    explicit: Option<&Path>,
    exe_dir: Option<PathBuf>,
    file_name: &str,
) -> Result<Option<PathBuf>> {
    if let Some(p) = explicit {
        if !p.is_file() {
            bail!("Settings file not found: {}", p.display());
        }
        return Ok(Some(p.to_path_buf()));
    }

    let found = exe_dir
        .map(|dir| dir.join(file_name))
        .filter(|candidate| candidate.is_file());
    match &found {
        Some(p) => tracing::debug!("Using engine settings: {}", p.display()),
        None => tracing::debug!("No {} next to executable; using engine defaults", file_name),
    }
    Ok(found)
}

/// Directory containing the running executable.
fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Returns the global config directory path.
///
/// Resolution: `$LINTGATE_CONFIG_DIR` > `~/.lintgate/`
///
/// The env var override enables testing and custom CI setups.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("LINTGATE_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".lintgate"))
}
