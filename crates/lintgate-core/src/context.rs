//! The per-invocation analysis context handed to the engine.

use crate::ignore_list::IgnoreSet;
use crate::types::TargetFileSet;
use std::path::{Path, PathBuf};

/// Everything the engine needs for one run.
///
/// Built once by [`ScopeBuilder`](crate::ScopeBuilder) and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    project_root: String,
    settings_path: Option<PathBuf>,
    targets: TargetFileSet,
    ignore: IgnoreSet,
}

impl AnalysisContext {
    /// Creates a context from its parts.
    #[must_use]
    pub fn new(
        project_root: impl Into<String>,
        settings_path: Option<PathBuf>,
        targets: TargetFileSet,
        ignore: IgnoreSet,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            settings_path,
            targets,
            ignore,
        }
    }

    /// Inferred common root of the candidate files. Empty if there were none.
    #[must_use]
    pub fn project_root(&self) -> &str {
        &self.project_root
    }

    /// Engine settings file, if one was found.
    #[must_use]
    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    /// Ignore-filtered files to analyze.
    #[must_use]
    pub fn targets(&self) -> &TargetFileSet {
        &self.targets
    }

    /// The ignore list that was applied.
    #[must_use]
    pub fn ignore(&self) -> &IgnoreSet {
        &self.ignore
    }
}
