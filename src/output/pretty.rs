//! Colored human-readable output.

use colored::Colorize;

use crate::core::{Entry, Tag};

/// Format a list of entries as a pretty table.
#[must_use]
pub fn format_entries_pretty(entries: &[&Entry], title: &str) -> String {
    if entries.is_empty() {
        return format!("{} (0 items)\n  No items", title);
    }

    let mut output = format!("{} ({} items)\n", title, entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        let status_icon = if entry.done {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let mut line = format!("{} {}", status_icon, entry.description.bold());

        if let Some(priority) = entry.priority {
            line.push_str(&format!("  {}", format!("({priority})").red()));
        }

        if let Some(completed) = entry.completion_date {
            line.push_str(&format!("  {}", completed.to_string().green()));
        }
        line.push_str(&format!("  {}", entry.creation_date.to_string().yellow()));

        if !entry.tags.is_empty() {
            let tags_str = entry
                .tags
                .iter()
                .map(Tag::render)
                .collect::<Vec<_>>()
                .join(" ");
            line.push_str(&format!("  {}", tags_str.cyan()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single entry as pretty output.
#[must_use]
pub fn format_entry_pretty(entry: &Entry) -> String {
    let status_icon = if entry.done {
        "[x]".green()
    } else {
        "[ ]".white()
    };

    let mut output = format!("{} {}\n", status_icon, entry.description.bold());

    if let Some(priority) = entry.priority {
        output.push_str(&format!("  {}: {}\n", "Priority".dimmed(), priority));
    }

    if let Some(completed) = entry.completion_date {
        output.push_str(&format!("  {}: {}\n", "Completed".dimmed(), completed));
    }

    output.push_str(&format!(
        "  {}: {}\n",
        "Created".dimmed(),
        entry.creation_date
    ));

    if !entry.tags.is_empty() {
        let tags_str = entry
            .tags
            .iter()
            .map(Tag::render)
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("  {}: {}\n", "Tags".dimmed(), tags_str));
    }

    output.push_str(&format!("  {}: {}\n", "Line".dimmed(), entry.render()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse;

    #[test]
    fn test_format_empty_list() {
        let output = format_entries_pretty(&[], "Todos");
        assert!(output.contains("0 items"));
        assert!(output.contains("No items"));
    }

    #[test]
    fn test_format_entries_includes_fields() {
        let entry = parse("x (A) 2016-04-30 measure space for +chapelShelving @chapel").unwrap();
        let output = format_entries_pretty(&[&entry], "Todos");

        assert!(output.contains("1 items"));
        assert!(output.contains("measure space for"));
        assert!(output.contains("(A)"));
        assert!(output.contains("2016-04-30"));
        assert!(output.contains("+chapelShelving"));
        assert!(output.contains("@chapel"));
    }

    #[test]
    fn test_format_single_entry() {
        let entry = parse("call customer due:now").unwrap();
        let output = format_entry_pretty(&entry);

        assert!(output.contains("call customer"));
        assert!(output.contains("due:now"));
        assert!(output.contains("Created"));
    }
}
