//! The analysis engine seam.
//!
//! lintgate does not check any rules itself. An [`AnalysisEngine`] takes the
//! [`AnalysisContext`] and returns the complete list of violations once the
//! run has finished.

use crate::config::EngineConfig;
use crate::context::AnalysisContext;
use crate::path_math::normalize_separators;
use crate::types::Violation;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::debug;

/// Errors raised while running the engine.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum EngineError {
    /// The engine process could not be started.
    #[error("Failed to start analysis engine {command}: {source}")]
    #[diagnostic(
        code(lintgate::engine::spawn),
        help("set [engine].command in lintgate.toml")
    )]
    Spawn {
        /// Program that failed to start.
        command: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The engine exited with an unexpected status.
    #[error("Analysis engine {command} failed with {status}")]
    #[diagnostic(code(lintgate::engine::status))]
    Status {
        /// Program that failed.
        command: PathBuf,
        /// Exit status reported by the OS.
        status: ExitStatus,
    },
}

/// An external style/lint checker.
pub trait AnalysisEngine {
    /// Short name used in log messages.
    fn name(&self) -> &str;

    /// Analyzes every target in `ctx` and returns all violations found.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot run to completion.
    fn analyze(&self, ctx: &AnalysisContext) -> Result<Vec<Violation>, EngineError>;
}

/// Runs the engine as a child process.
///
/// The command line is the configured program and arguments, then
/// `--project <root>`, `--settings <path>` when a settings file is known,
/// and finally the target files. Each stdout line holding a JSON
/// [`Violation`] is collected; other lines are engine chatter and only
/// logged.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    command: PathBuf,
    args: Vec<String>,
    success_codes: Vec<i32>,
}

impl ProcessEngine {
    /// Creates an engine for `command` with no extra arguments.
    #[must_use]
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            success_codes: vec![0],
        }
    }

    /// Creates an engine from the `[engine]` configuration section.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            success_codes: config.success_codes.clone(),
        }
    }

    /// Adds an argument placed before the generated ones.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Builds the argument list for `ctx`.
    #[must_use]
    pub fn arguments(&self, ctx: &AnalysisContext) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        args.push("--project".into());
        args.push(ctx.project_root().into());
        if let Some(settings) = ctx.settings_path() {
            args.push("--settings".into());
            args.push(settings.as_os_str().to_owned());
        }
        args.extend(ctx.targets().iter().map(OsString::from));
        args
    }

    fn is_success(&self, status: ExitStatus) -> bool {
        status
            .code()
            .is_some_and(|code| self.success_codes.contains(&code))
    }
}

impl AnalysisEngine for ProcessEngine {
    fn name(&self) -> &str {
        self.command.to_str().unwrap_or("engine")
    }

    fn analyze(&self, ctx: &AnalysisContext) -> Result<Vec<Violation>, EngineError> {
        if ctx.targets().is_empty() {
            debug!("No files to analyze");
            return Ok(Vec::new());
        }

        debug!(
            "Running {} on {} file(s)",
            self.command.display(),
            ctx.targets().len()
        );

        let output = Command::new(&self.command)
            .args(self.arguments(ctx))
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| EngineError::Spawn {
                command: self.command.clone(),
                source: e,
            })?;

        if !self.is_success(output.status) {
            return Err(EngineError::Status {
                command: self.command.clone(),
                status: output.status,
            });
        }

        let violations = parse_output(&String::from_utf8_lossy(&output.stdout));
        debug!("Engine reported {} violation(s)", violations.len());
        Ok(violations)
    }
}

/// Extracts violations from engine stdout.
///
/// Lines that are not JSON violation records are logged at debug level and
/// skipped. Reported paths are normalized to `/`.
#[must_use]
pub fn parse_output(stdout: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    for line in stdout.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with('{') {
            match serde_json::from_str::<Violation>(line) {
                Ok(mut v) => {
                    v.source_path = normalize_separators(&v.source_path);
                    violations.push(v);
                    continue;
                }
                Err(e) => debug!("Unparsed engine record ({e}): {line}"),
            }
        } else {
            debug!("engine: {line}");
        }
    }

    violations
}
