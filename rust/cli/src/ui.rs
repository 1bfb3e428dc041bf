//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// One `label: value` summary line, label padded for alignment.
pub fn write_summary_line(
    out: &mut dyn Write,
    label: &str,
    value: impl std::fmt::Display,
) -> std::io::Result<()> {
    writeln!(out, "{:<18}{}", format!("{}:", label), value)
}
