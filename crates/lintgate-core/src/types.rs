//! Core types for engine violations and the target file set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single rule breach reported by the analysis engine.
///
/// Violations are produced by the engine only; lintgate groups and renders
/// them but never constructs or edits them outside of tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Path of the offending source file, as the engine reports it.
    #[serde(alias = "path")]
    pub source_path: String,
    /// Display name of the source file (usually the file name).
    #[serde(alias = "name")]
    pub source_name: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Rule identifier (e.g., "SA1600").
    #[serde(alias = "rule")]
    pub rule_id: String,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        source_path: impl Into<String>,
        source_name: impl Into<String>,
        line: usize,
        rule_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            source_name: source_name.into(),
            line,
            rule_id: rule_id.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: [{}] {}",
            self.source_path, self.line, self.rule_id, self.message
        )
    }
}

/// Ordered, duplicate-free list of files submitted to the engine.
///
/// Entries are forward-slash normalized by the code that produces them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetFileSet {
    files: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl TargetFileSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a file unless it is already present. Returns `true` if added.
    pub fn push(&mut self, file: impl Into<String>) -> bool {
        let file = file.into();
        if !self.seen.insert(file.clone()) {
            return false;
        }
        self.files.push(file);
        true
    }

    /// Number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if there are no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates the files in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// Returns the files as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.files
    }
}

impl<S: Into<String>> FromIterator<S> for TargetFileSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for file in iter {
            set.push(file);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TargetFileSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
