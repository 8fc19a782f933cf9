//! Command implementations.
//!
//! Each command takes its parsed arguments plus the resolved store and
//! output format, does its work, and returns the text to print.

use chrono::Utc;
use clap::CommandFactory;

use crate::cli::args::{Cli, OutputFormat};
use crate::core::{filter, parse};
use crate::error::RodoError;
use crate::output;
use crate::storage::Store;

/// Parse a new entry and append it to the store.
///
/// With `parse_only` set the entry is printed but not stored, which makes
/// the parser usable as a line checker in scripts.
///
/// # Errors
///
/// Returns an error if the line does not parse or the store cannot be
/// written.
pub fn add(
    store: &Store,
    text: &str,
    parse_only: bool,
    format: OutputFormat,
) -> Result<String, RodoError> {
    let entry = parse(text)?;

    if !parse_only {
        store.append(&entry)?;
    }

    output::format_entry(&entry, format)
}

/// List entries, optionally narrowed by project, context, key, or status.
///
/// Filters combine: `--project sales --pending` lists pending entries
/// tagged with a project containing "sales".
///
/// # Errors
///
/// Returns an error if the store cannot be read or a stored line does not
/// parse.
#[allow(clippy::fn_params_excessive_bools)]
pub fn list(
    store: &Store,
    project: Option<&str>,
    context: Option<&str>,
    key: Option<&str>,
    done: bool,
    pending: bool,
    format: OutputFormat,
) -> Result<String, RodoError> {
    let entries = store.load()?;

    let mut selected: Vec<&crate::core::Entry> = entries.iter().collect();

    if let Some(value) = project {
        selected = filter::by_project(&selected, value);
    }
    if let Some(value) = context {
        selected = filter::by_context(&selected, value);
    }
    if let Some(value) = key {
        selected = filter::by_key(&selected, value);
    }
    if done {
        selected = filter::completed(&selected);
    }
    if pending {
        selected = filter::pending(&selected);
    }

    output::format_entries(&selected, "Todos", format)
}

/// Mark the first entry matching `text` as done, stamped with today's
/// date.
///
/// The matched line is removed, re-parsed, completed, and appended back,
/// so the store always holds the canonical rendering of the entry.
///
/// # Errors
///
/// Returns an error if no entry matches, the matched line does not parse,
/// or the store cannot be rewritten.
pub fn done(store: &Store, text: &str, format: OutputFormat) -> Result<String, RodoError> {
    let Some(removed) = store.delete_first(text)? else {
        return Err(RodoError::Storage(format!("no entry matching '{text}'")));
    };

    let entry = parse(&removed)?.mark_done(Utc::now().date_naive());
    store.append(&entry)?;

    output::format_entry(&entry, format)
}

/// Delete the first entry matching `text`.
///
/// # Errors
///
/// Returns an error if no entry matches or the store cannot be rewritten.
pub fn delete(store: &Store, text: &str) -> Result<String, RodoError> {
    let Some(removed) = store.delete_first(text)? else {
        return Err(RodoError::Storage(format!("no entry matching '{text}'")));
    };

    Ok(format!("Deleted: {removed}"))
}

/// Generate shell completions to stdout.
pub fn completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> Store {
        Store::open_at(&dir.path().join("todos.txt"))
    }

    #[test]
    fn test_add_appends_and_reports() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let report = add(
            &store,
            "call customer +sales due:tomorrow",
            false,
            OutputFormat::Pretty,
        )
        .unwrap();

        assert!(report.contains("call customer"));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_add_parse_only_does_not_store() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        add(&store, "walk dog @home", true, OutputFormat::Pretty).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_bad_line() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let err = add(&store, "call customer due:", false, OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, RodoError::Parse(_)));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_list_filters_combine() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        add(&store, "call mom +Family @phone", false, OutputFormat::Pretty).unwrap();
        add(
            &store,
            "x 2024-02-01 thank mom for the meatballs @phone",
            false,
            OutputFormat::Pretty,
        )
        .unwrap();
        add(
            &store,
            "schedule Goodwill pickup +GarageSale",
            false,
            OutputFormat::Pretty,
        )
        .unwrap();

        let report = list(
            &store,
            None,
            Some("phone"),
            None,
            false,
            true,
            OutputFormat::Pretty,
        )
        .unwrap();

        assert!(report.contains("1 items"));
        assert!(report.contains("call mom"));
        assert!(!report.contains("meatballs"));
    }

    #[test]
    fn test_done_rewrites_entry_as_completed() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        add(&store, "walk dog @home", false, OutputFormat::Pretty).unwrap();
        done(&store, "walk dog", OutputFormat::Pretty).unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].done);
        assert_eq!(entries[0].completion_date, Some(Utc::now().date_naive()));
    }

    #[test]
    fn test_done_without_match_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let err = done(&store, "not present", OutputFormat::Pretty).unwrap_err();
        assert!(err.to_string().contains("no entry matching"));
    }

    #[test]
    fn test_delete_removes_first_match_only() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        add(&store, "call mom +Family", false, OutputFormat::Pretty).unwrap();
        add(&store, "call mom again", false, OutputFormat::Pretty).unwrap();

        let report = delete(&store, "call mom").unwrap();
        assert!(report.starts_with("Deleted:"));
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
