//! Error types for rodo.

use thiserror::Error;

/// Errors produced while parsing a single todo.txt line.
///
/// Every interpreter and assembler failure surfaces as one of these kinds;
/// a malformed line never yields a partial entry. Callers loading a
/// multi-line store decide whether to skip or abort on a bad line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Priority marker is not a single uppercase letter in parentheses.
    #[error("invalid priority marker: expected '(X)' with X in A-Z")]
    InvalidPriority,

    /// A date token does not match the `YYYY-MM-DD` shape.
    #[error("invalid date token: {0:?}")]
    InvalidDate(String),

    /// A date token matched the shape but is not a real calendar date.
    #[error("invalid completion date: {0:?}")]
    InvalidCompletionDate(String),

    /// A key-value tag with a missing value, e.g. `due:`.
    #[error("key-value tag {0:?} has an empty value")]
    EmptyValue(String),

    /// Catch-all for interpreter invariant violations.
    #[error("malformed line: {0}")]
    MalformedLine(String),
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum RodoError {
    /// A todo line failed to parse.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Storage file access or rewrite failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration could not be resolved, read, or written.
    #[error("config error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
