//! The parsed task data model and its canonical line renderer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Marker denoting a completed task, valid only at line start followed by
/// a separator.
pub(crate) const DONE_MARKER: char = 'x';
/// Opens a priority marker, e.g. `(A)`.
pub(crate) const PRIORITY_OPEN: char = '(';
/// Closes a priority marker.
pub(crate) const PRIORITY_CLOSE: char = ')';
/// Separator inside a `YYYY-MM-DD` date token.
pub(crate) const DATE_SEPARATOR: char = '-';
/// Introduces a project tag, e.g. `+chapelShelving`.
pub(crate) const PROJECT_MARKER: char = '+';
/// Introduces a context tag, e.g. `@chapel`.
pub(crate) const CONTEXT_MARKER: char = '@';
/// Separates the key and value of a key-value tag, e.g. `due:2016-05-30`.
pub(crate) const KV_SEPARATOR: char = ':';

/// Date format used throughout the line format.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// A typed annotation attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Tag {
    /// A `+value` project tag.
    Project {
        /// Tag value, marker excluded.
        value: String,
    },
    /// An `@value` context tag.
    Context {
        /// Tag value, marker excluded.
        value: String,
    },
    /// A `key:value` tag. The value is never empty.
    KeyValue {
        /// Non-whitespace run preceding the colon.
        key: String,
        /// Non-whitespace run following the colon.
        value: String,
    },
}

impl Tag {
    /// Render the tag with its kind-specific marker.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Project { value } => format!("{PROJECT_MARKER}{value}"),
            Self::Context { value } => format!("{CONTEXT_MARKER}{value}"),
            Self::KeyValue { key, value } => format!("{key}{KV_SEPARATOR}{value}"),
        }
    }

    /// The tag's value, regardless of kind.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Project { value } | Self::Context { value } | Self::KeyValue { value, .. } => {
                value
            }
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// One parsed task line.
///
/// An entry is constructed once per parse call and not mutated afterwards;
/// status changes go through consuming builders like [`Entry::mark_done`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// True iff the line begins with the completion marker followed by a
    /// separator.
    pub done: bool,
    /// Single uppercase letter from a `(X)` marker at the expected offset.
    pub priority: Option<char>,
    /// Set when the line carries two leading dates (completion precedes
    /// creation), or a single date on a completed entry.
    pub completion_date: Option<NaiveDate>,
    /// Explicit from the line when present, otherwise today (UTC).
    pub creation_date: NaiveDate,
    /// Residual free text after all structured tokens are removed.
    pub description: String,
    /// Tags in order of first appearance in the line.
    pub tags: Vec<Tag>,
    /// The input line as given to the parser, for exact line matching by
    /// the storage layer. Not reconstructible by the renderer.
    pub original: String,
}

impl Entry {
    /// Serialize the entry back into canonical line form.
    ///
    /// Field order: completion marker, priority, completion date, creation
    /// date, description, tags in stored order. Fields are joined with
    /// single spaces; the result never contains a line terminator.
    #[must_use]
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if self.done {
            parts.push(DONE_MARKER.to_string());
        }
        if let Some(letter) = self.priority {
            parts.push(format!("{PRIORITY_OPEN}{letter}{PRIORITY_CLOSE}"));
        }
        if let Some(date) = self.completion_date {
            parts.push(date.format(DATE_FORMAT).to_string());
        }
        parts.push(self.creation_date.format(DATE_FORMAT).to_string());
        if !self.description.is_empty() {
            parts.push(self.description.clone());
        }
        for tag in &self.tags {
            parts.push(tag.render());
        }

        parts.join(" ")
    }

    /// Consume the entry and return a completed copy stamped with the
    /// given completion date.
    #[must_use]
    pub fn mark_done(mut self, completion_date: NaiveDate) -> Self {
        self.done = true;
        self.completion_date = Some(completion_date);
        self
    }

}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
