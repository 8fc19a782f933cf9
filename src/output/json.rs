//! JSON output formatting for rodo.

use serde_json::json;

use crate::core::Entry;
use crate::error::RodoError;

/// Format entries as JSON.
///
/// # Errors
///
/// Returns `RodoError::Json` if serialization fails.
pub fn format_entries_json(entries: &[&Entry], list_name: &str) -> Result<String, RodoError> {
    let output = json!({
        "list": list_name,
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single entry as JSON.
///
/// # Errors
///
/// Returns `RodoError::Json` if serialization fails.
pub fn format_entry_json(entry: &Entry) -> Result<String, RodoError> {
    Ok(serde_json::to_string_pretty(entry)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse;

    #[test]
    fn test_format_entries_json_shape() {
        let entry = parse("call customer +proj1 due:now").unwrap();
        let output = format_entries_json(&[&entry], "Todos").unwrap();

        assert!(output.contains("\"list\": \"Todos\""));
        assert!(output.contains("\"count\": 1"));
        assert!(output.contains("\"description\": \"call customer\""));
        assert!(output.contains("\"kind\": \"project\""));
    }

    #[test]
    fn test_format_entry_json_includes_dates() {
        let entry = parse("x (B) 2022-04-20 2022-04-22 walk dog").unwrap();
        let output = format_entry_json(&entry).unwrap();

        assert!(output.contains("\"completion_date\": \"2022-04-20\""));
        assert!(output.contains("\"creation_date\": \"2022-04-22\""));
        assert!(output.contains("\"done\": true"));
    }
}
