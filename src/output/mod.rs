//! Output formatting for rodo.
//!
//! This module provides formatters for displaying entries in various
//! formats.

mod json;
mod pretty;

pub use json::{format_entries_json, format_entry_json};
pub use pretty::{format_entries_pretty, format_entry_pretty};

use crate::cli::args::OutputFormat;
use crate::core::Entry;
use crate::error::RodoError;

/// Format a list of entries based on output format.
///
/// # Errors
///
/// Returns `RodoError::Json` if JSON serialization fails.
pub fn format_entries(
    entries: &[&Entry],
    title: &str,
    format: OutputFormat,
) -> Result<String, RodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_entries_pretty(entries, title)),
        OutputFormat::Json => format_entries_json(entries, title),
    }
}

/// Format a single entry based on output format.
///
/// # Errors
///
/// Returns `RodoError::Json` if JSON serialization fails.
pub fn format_entry(entry: &Entry, format: OutputFormat) -> Result<String, RodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_entry_pretty(entry)),
        OutputFormat::Json => format_entry_json(entry),
    }
}
