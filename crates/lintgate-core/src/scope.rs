//! Target selection: turns a file source into an [`AnalysisContext`].

use crate::config::{has_extension, Config};
use crate::context::AnalysisContext;
use crate::ignore_list::{resolve_ignore_list, IgnoreListError, IgnoreSet};
use crate::path_math::{common_root_path, normalize_separators};
use crate::types::TargetFileSet;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Errors that can occur while building the target scope.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum ScopeError {
    /// The file list could not be read.
    #[error("Failed to read file list {path}: {source}")]
    #[diagnostic(code(lintgate::scope::list_file))]
    ListFile {
        /// Path of the file list.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The directory scan failed.
    #[error("Failed to scan {root}: {source}")]
    #[diagnostic(code(lintgate::scope::walk))]
    Walk {
        /// Directory being scanned.
        root: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// A discovered ignore list could not be read.
    #[error(transparent)]
    #[diagnostic(transparent)]
    IgnoreList(#[from] IgnoreListError),
}

/// Where the raw file list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// A text file of newline-separated paths.
    ListFile(PathBuf),
    /// One source file, taken as given.
    SingleFile(PathBuf),
    /// A directory scanned recursively for recognized files.
    Directory(PathBuf),
}

/// Inputs to [`ScopeBuilder`] that come from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeOptions {
    /// Recognized source extension.
    pub extension: String,
    /// Ignore-list file name searched for above the targets.
    pub ignore_file_name: String,
    /// Resolved engine settings file, if any.
    pub settings_path: Option<PathBuf>,
}

impl ScopeOptions {
    /// Takes extension and ignore-file name from `config`.
    #[must_use]
    pub fn from_config(config: &Config, settings_path: Option<PathBuf>) -> Self {
        Self {
            extension: config.extension.clone(),
            ignore_file_name: config.ignore_file.clone(),
            settings_path,
        }
    }
}

impl Default for ScopeOptions {
    fn default() -> Self {
        Self::from_config(&Config::default(), None)
    }
}

/// Builds the [`AnalysisContext`] for one invocation.
#[derive(Debug, Clone, Default)]
pub struct ScopeBuilder {
    options: ScopeOptions,
}

impl ScopeBuilder {
    /// Creates a builder with the given options.
    #[must_use]
    pub fn new(options: ScopeOptions) -> Self {
        Self { options }
    }

    /// Resolves `source` into candidates, infers the project root, and
    /// removes ignore-listed files.
    ///
    /// # Errors
    ///
    /// Returns an error if the file list, directory, or a discovered ignore
    /// list cannot be read.
    pub fn build(&self, source: &FileSource) -> Result<AnalysisContext, ScopeError> {
        let candidates = self.candidates(source)?;
        debug!("{} candidate file(s)", candidates.len());

        let project_root = common_root_path(candidates.as_slice());
        debug!("Project root: {:?}", project_root);

        let ignore = resolve_ignore_list(&self.options.ignore_file_name, candidates.as_slice())?
            .unwrap_or_default();
        let targets = apply_ignore(&candidates, &ignore);

        if let Some(path) = ignore.source() {
            debug!(
                "Ignoring {} of {} file(s) per {}",
                candidates.len() - targets.len(),
                candidates.len(),
                path.display()
            );
        }

        Ok(AnalysisContext::new(
            project_root,
            self.options.settings_path.clone(),
            targets,
            ignore,
        ))
    }

    /// Resolves the raw, extension-filtered and de-duplicated candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if the file list or directory cannot be read.
    pub fn candidates(&self, source: &FileSource) -> Result<TargetFileSet, ScopeError> {
        let files: Vec<String> = match source {
            FileSource::ListFile(path) => read_list_file(path)?
                .into_iter()
                .filter(|file| has_extension(file, &self.options.extension))
                .collect(),
            FileSource::SingleFile(path) => {
                vec![normalize_separators(&path.to_string_lossy())]
            }
            FileSource::Directory(dir) => scan_directory(dir, &self.options.extension)?,
        };
        Ok(files.into_iter().collect())
    }
}

/// Removes every candidate listed in `ignore`, keeping order.
///
/// Matching is exact string equality; two spellings of the same path are
/// different entries.
#[must_use]
pub fn apply_ignore(candidates: &TargetFileSet, ignore: &IgnoreSet) -> TargetFileSet {
    candidates
        .iter()
        .filter(|file| {
            let skip = ignore.contains(file);
            if skip {
                debug!("Ignoring: {}", file);
            }
            !skip
        })
        .collect()
}

/// Reads a newline-separated file list. Blank lines are skipped and
/// separators normalized to `/`.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_list_file(path: &Path) -> Result<Vec<String>, ScopeError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScopeError::ListFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(normalize_separators)
        .collect())
}

/// Recursively lists files under `dir` with the given extension.
///
/// Entries are sorted by file name within each directory so repeated scans
/// of an unchanged tree give the same order.
///
/// # Errors
///
/// Returns an error if `dir` does not exist or cannot be walked.
pub fn scan_directory(dir: &Path, extension: &str) -> Result<Vec<String>, ScopeError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| ScopeError::Walk {
            root: dir.to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = normalize_separators(&entry.path().to_string_lossy());
        if has_extension(&path, extension) {
            files.push(path);
        }
    }

    debug!("Scanned {}: {} file(s)", dir.display(), files.len());
    Ok(files)
}
