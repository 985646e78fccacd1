//! Check command implementation.

use anyhow::{Context, Result};
use lintgate_core::{
    render, AnalysisEngine, Config, FileSource, ProcessEngine, ScopeBuilder, ScopeOptions,
};
use std::path::PathBuf;

/// Runs the check command and returns the exit status to report.
pub fn run(source: &FileSource, config: &Config, settings_path: Option<PathBuf>) -> Result<i32> {
    let scope = ScopeBuilder::new(ScopeOptions::from_config(config, settings_path));
    let ctx = scope
        .build(source)
        .context("Failed to resolve files to analyze")?;

    tracing::debug!(
        "Project root {:?}, {} target(s)",
        ctx.project_root(),
        ctx.targets().len()
    );

    let engine = ProcessEngine::from_config(&config.engine);
    let violations = engine
        .analyze(&ctx)
        .with_context(|| format!("Analysis failed: {}", engine.name()))?;

    let report = render(&violations, ctx.targets().as_slice());
    super::output::print_report(&report)?;

    Ok(report.exit_code)
}
