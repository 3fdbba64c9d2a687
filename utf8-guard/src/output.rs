//! Output formatting for validation reports.
//!
//! The human format is line-compatible with existing CI log scrapers and must
//! not change: a single success line, or a header followed by two lines per
//! violation.

use std::io::Write;

use crate::report::ValidationReport;

/// Printed when every checked file is valid.
pub const SUCCESS_MESSAGE: &str = "\u{2705} All checked files are valid UTF-8.";

/// First line of a failing report.
pub const FAILURE_HEADER: &str = "Non-UTF8 files detected:";

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.violations.is_empty() {
        writeln!(writer, "{SUCCESS_MESSAGE}")?;
        return Ok(());
    }

    writeln!(writer, "{FAILURE_HEADER}")?;
    for violation in &report.violations {
        writeln!(writer, "{}", violation.format_human_readable())?;
    }
    Ok(())
}
