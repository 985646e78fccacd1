//! Path utilities for scoping: common roots and ancestor search.
//!
//! Paths are handled as `/`-separated strings. Inputs are normalized once
//! with [`normalize_separators`] at the boundary where they enter lintgate.

use std::path::{Path, PathBuf};

/// Converts every `\` to `/`.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Computes the common leading `/`-segments of `paths`.
///
/// Every path is compared against the *first* one only, so the result
/// depends on input order and callers should pass a stable order.
///
/// # Examples
///
/// ```
/// use lintgate_core::path_math::common_root_path;
///
/// assert_eq!(common_root_path::<&str>(&[]), "");
/// assert_eq!(common_root_path(&["a/b/c.cs"]), "a/b/c.cs");
/// assert_eq!(common_root_path(&["a/b/x.cs", "a/b/y.cs", "a/c/z.cs"]), "a");
/// ```
#[must_use]
pub fn common_root_path<S: AsRef<str>>(paths: &[S]) -> String {
    let Some(first) = paths.first() else {
        return String::new();
    };
    let reference: Vec<&str> = first.as_ref().split('/').collect();

    let levels = paths
        .iter()
        .map(|path| equal_prefix_len(&reference, path.as_ref()))
        .min()
        .unwrap_or(0);

    reference[..levels].join("/")
}

fn equal_prefix_len(reference: &[&str], path: &str) -> usize {
    reference
        .iter()
        .zip(path.split('/'))
        .take_while(|(a, b)| **a == *b)
        .count()
}

/// Number of `/` separators in a path, used as a cheap depth estimate.
#[must_use]
pub fn separator_depth(path: &str) -> usize {
    path.matches('/').count()
}

/// Searches `start_dir` and each of its ancestors for a file named `file_name`.
///
/// The walk ends after checking the filesystem root, or when the directory
/// becomes empty (a relative path with no more components). Returns the
/// nearest match.
#[must_use]
pub fn find_ancestor_file(file_name: &str, start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir;

    while !dir.as_os_str().is_empty() {
        let candidate = dir.join(file_name);
        tracing::trace!("Probing {}", candidate.display());
        if candidate.is_file() {
            return Some(candidate);
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    None
}
