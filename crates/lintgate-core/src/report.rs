//! Per-file violation reports.

use crate::types::Violation;
use std::fmt::Write;
use tracing::debug;

/// Exit status when no target file had violations.
pub const EXIT_CLEAN: i32 = 0;

/// Exit status when at least one target file had violations.
pub const EXIT_VIOLATIONS: i32 = 1;

/// Rendered report text and the process exit status it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    /// Report text; empty when there is nothing to report.
    pub text: String,
    /// [`EXIT_CLEAN`] or [`EXIT_VIOLATIONS`].
    pub exit_code: i32,
}

/// Groups `violations` under each of `target_files`, in target order.
///
/// A violation belongs to a file when its `source_path` equals the target
/// string exactly. Files without violations produce no output; violations
/// matching no target are dropped.
#[must_use]
pub fn render<S: AsRef<str>>(violations: &[Violation], target_files: &[S]) -> RenderedReport {
    let mut text = String::new();
    let mut exit_code = EXIT_CLEAN;
    let mut rendered = 0;

    for file in target_files {
        let file = file.as_ref();
        let file_violations: Vec<&Violation> = violations
            .iter()
            .filter(|v| v.source_path == file)
            .collect();

        let Some(first) = file_violations.first() else {
            continue;
        };

        exit_code = EXIT_VIOLATIONS;
        rendered += file_violations.len();
        let _ = writeln!(
            text,
            "{} - {} violations.",
            first.source_name,
            file_violations.len()
        );
        for v in &file_violations {
            let _ = writeln!(text, "      {}: Line {}-{}", v.rule_id, v.line, v.message);
        }
    }

    if rendered < violations.len() {
        debug!(
            "{} violation(s) did not match any target file",
            violations.len() - rendered
        );
    }

    RenderedReport { text, exit_code }
}
