//! List command implementation.

use anyhow::{Context, Result};
use lintgate_core::{scan_directory, Config};
use std::path::Path;

/// Prints every recognized source file under `dir`, one per line.
///
/// The output can be saved as an ignore list or fed back as a file list.
pub fn run(dir: &Path, config: &Config) -> Result<()> {
    let files = scan_directory(dir, &config.extension)
        .with_context(|| format!("Failed to list {}", dir.display()))?;
    super::output::print_listing(&files)
}
