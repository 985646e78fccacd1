//! Shared output for reports and listings.

use anyhow::Result;
use lintgate_core::RenderedReport;
use std::io::Write;

/// Writes the violation report to stderr.
pub fn print_report(report: &RenderedReport) -> Result<()> {
    let mut err = std::io::stderr().lock();
    err.write_all(report.text.as_bytes())?;
    err.flush()?;
    Ok(())
}

/// Writes one path per line to stdout.
pub fn print_listing(files: &[String]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for file in files {
        writeln!(out, "{file}")?;
    }
    out.flush()?;
    Ok(())
}
