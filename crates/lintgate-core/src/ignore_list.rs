//! Ignore-list discovery.
//!
//! The ignore list is a plain text file, one path per line, found by walking
//! up from the directory of the deepest target file. Entries are compared
//! with target paths by exact string equality.

use crate::path_math::{find_ancestor_file, separator_depth};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error reading an ignore-list file that was found.
#[derive(Debug, Error, miette::Diagnostic)]
#[error("Failed to read ignore list {path}: {source}")]
#[diagnostic(code(lintgate::ignore_list::read))]
pub struct IgnoreListError {
    /// Path of the ignore list.
    pub path: PathBuf,
    /// Underlying IO error.
    pub source: std::io::Error,
}

/// Paths excluded from analysis, loaded verbatim from an ignore-list file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    entries: HashSet<String>,
    source: Option<PathBuf>,
}

impl IgnoreSet {
    /// Creates an empty set that filters nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses newline-separated entries. Blank lines are skipped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self {
            entries,
            source: None,
        }
    }

    /// Reads and parses an ignore-list file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, IgnoreListError> {
        let content = std::fs::read_to_string(path).map_err(|e| IgnoreListError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut set = Self::parse(&content);
        set.source = Some(path.to_path_buf());
        Ok(set)
    }

    /// Returns true if `path` is listed verbatim.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains(path)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is ignored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File the entries were loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Picks the path with the most `/` separators; ties go to the earliest.
///
/// Separator count stands in for directory depth. Paths are not normalized
/// first.
#[must_use]
pub fn deepest_path<S: AsRef<str>>(paths: &[S]) -> Option<&str> {
    let mut deepest: Option<(&str, usize)> = None;
    for path in paths {
        let path = path.as_ref();
        let depth = separator_depth(path);
        if deepest.map_or(true, |(_, best)| depth > best) {
            deepest = Some((path, depth));
        }
    }
    deepest.map(|(path, _)| path)
}

/// Locates and loads the ignore list for a set of target paths.
///
/// Searches upward from the parent directory of [`deepest_path`]. Returns
/// `Ok(None)` when `target_paths` is empty or no ancestor holds
/// `ignore_file_name`; callers treat that as an empty [`IgnoreSet`].
///
/// # Errors
///
/// Returns an error only if a discovered file cannot be read.
pub fn resolve_ignore_list<S: AsRef<str>>(
    ignore_file_name: &str,
    target_paths: &[S],
) -> Result<Option<IgnoreSet>, IgnoreListError> {
    let Some(deepest) = deepest_path(target_paths) else {
        return Ok(None);
    };
    let start_dir = Path::new(deepest).parent().unwrap_or_else(|| Path::new(""));

    let Some(found) = find_ancestor_file(ignore_file_name, start_dir) else {
        debug!(
            "No {} found above {}",
            ignore_file_name,
            start_dir.display()
        );
        return Ok(None);
    };

    let set = IgnoreSet::from_file(&found)?;
    debug!("Loaded {} ignore entries from {}", set.len(), found.display());
    Ok(Some(set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn slash(path: &Path) -> String {
        crate::path_math::normalize_separators(&path.to_string_lossy())
    }

    #[test]
    fn parse_skips_blank_lines_and_strips_crlf() {
        let set = IgnoreSet::parse("a/b.cs\r\n\r\nc/d.cs\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("a/b.cs"));
        assert!(set.contains("c/d.cs"));
    }

    #[test]
    fn entries_are_not_normalized() {
        let set = IgnoreSet::parse("a\\b.cs\n./c.cs\n");
        assert!(set.contains("a\\b.cs"));
        assert!(!set.contains("a/b.cs"));
        assert!(!set.contains("c.cs"));
    }

    #[test]
    fn deepest_path_prefers_more_separators() {
        assert_eq!(deepest_path(&["a/b.cs", "a/b/c/d.cs", "a/b/c.cs"]), Some("a/b/c/d.cs"));
    }

    #[test]
    fn deepest_path_ties_go_to_first() {
        assert_eq!(deepest_path(&["x/y/1.cs", "a/b/2.cs"]), Some("x/y/1.cs"));
    }

    #[test]
    fn deepest_path_counts_raw_separators_only() {
        // Backslashes are not counted as separators.
        assert_eq!(deepest_path(&[r"a\b\c\d.cs", "a/b.cs"]), Some("a/b.cs"));
    }

    #[test]
    fn empty_targets_resolve_to_none() {
        let result = resolve_ignore_list::<&str>("StyleCop.ignore", &[]).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn no_ignore_file_resolves_to_none() {
        let tmp = TempDir::new().unwrap();
        let file = slash(&tmp.path().join("src/a.cs"));

        let result = resolve_ignore_list("lintgate-absent-4e1b.ignore", &[file]).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn finds_ignore_file_above_deepest_target() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("proj/src/deep")).unwrap();
        fs::write(tmp.path().join("proj/StyleCop.ignore"), "skip/me.cs\n").unwrap();

        let targets = vec![
            slash(&tmp.path().join("proj/a.cs")),
            slash(&tmp.path().join("proj/src/deep/b.cs")),
        ];
        let set = resolve_ignore_list("StyleCop.ignore", &targets)
            .unwrap()
            .expect("ignore list should be found");

        assert!(set.contains("skip/me.cs"));
        assert_eq!(set.source(), Some(tmp.path().join("proj/StyleCop.ignore").as_path()));
    }

    #[test]
    fn search_starts_at_deepest_target_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("proj/src")).unwrap();
        fs::create_dir_all(tmp.path().join("other")).unwrap();
        // Only reachable from the shallow target's directory.
        fs::write(tmp.path().join("other/StyleCop.ignore"), "x.cs\n").unwrap();

        let targets = vec![
            slash(&tmp.path().join("other/a.cs")),
            slash(&tmp.path().join("proj/src/b.cs")),
        ];
        assert!(resolve_ignore_list("StyleCop.ignore", &targets)
            .unwrap()
            .is_none());
    }
}
