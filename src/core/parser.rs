//! Single-pass entry assembler.
//!
//! Consumes the token sequence in positional order and resolves the
//! ordering-dependent fields (done marker at line start, priority right
//! after it, completion date before creation date). Each accepted token's
//! span is removed from the in-progress description as the token is
//! processed, so later interpreters never see already-consumed marker
//! text; the remaining free text is collapsed at the end.

use chrono::{NaiveDate, Utc};

use crate::core::entry::{Entry, Tag, DATE_FORMAT, DONE_MARKER, KV_SEPARATOR};
use crate::core::scanner::{scan, Token};
use crate::error::ParseError;

/// Offset at which an accepted completion marker must sit.
const DONE_OFFSET: usize = 0;
/// Width of the completion marker plus a single separator; the expected
/// priority offset on a completed line with a one-character separator run.
const DONE_SPAN: usize = 2;

/// Parse one todo.txt line into an [`Entry`].
///
/// Surrounding spaces are trimmed first; the trimmed line is retained as
/// the entry's `original`. Parsing is deterministic apart from the
/// creation date, which defaults to today (UTC) when the line carries no
/// explicit date.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed priority or date tokens, for a
/// key-value tag with an empty value, and for empty input. No partial
/// entry is produced on error.
pub fn parse(line: &str) -> Result<Entry, ParseError> {
    let original = line.trim();
    if original.is_empty() {
        return Err(ParseError::MalformedLine("empty line".to_string()));
    }

    let tokens = scan(original)?;
    assemble(&tokens, original)
}

fn assemble(tokens: &[Token], original: &str) -> Result<Entry, ParseError> {
    let mut done = false;
    let mut priority: Option<char> = None;
    let mut priority_offset = DONE_OFFSET;
    let mut dates: Vec<NaiveDate> = Vec::new();
    let mut tags: Vec<Tag> = Vec::new();
    let mut description = String::new();

    for token in tokens {
        match token {
            Token::Text(text) => description = text.clone(),
            Token::Done { offset } => {
                // A marker anywhere else stays in the description text.
                if *offset == DONE_OFFSET {
                    done = true;
                    // A separator run wider than one character shifts the
                    // expected priority position.
                    priority_offset = original
                        .chars()
                        .enumerate()
                        .skip(DONE_OFFSET + 1)
                        .find(|(_, c)| !c.is_whitespace())
                        .map_or(DONE_SPAN, |(i, _)| i);
                    description = strip_done_prefix(&description);
                }
            }
            Token::Priority { letter, offset } => {
                if *offset == priority_offset {
                    priority = Some(*letter);
                    if let Some(rest) = description.strip_prefix(&format!("({letter})")) {
                        description = rest.to_string();
                    }
                }
            }
            Token::Date(raw) => {
                let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
                    .map_err(|_| ParseError::InvalidCompletionDate(raw.clone()))?;
                dates.push(date);
                description = description.replacen(raw.as_str(), "", 1);
            }
            Token::Project(value) => tags.push(Tag::Project {
                value: value.clone(),
            }),
            Token::Context(value) => tags.push(Tag::Context {
                value: value.clone(),
            }),
            Token::KeyValue(raw) => {
                let tag = split_key_value(raw)?;
                if let Tag::KeyValue { key, .. } = &tag {
                    // The key marks the effective end of the free text:
                    // truncate at its first occurrence, even a coincidental
                    // one earlier in the line.
                    if let Some(pos) = description.find(key.as_str()) {
                        description.truncate(pos);
                    }
                }
                tags.push(tag);
            }
        }
    }

    // Textual removal, first occurrence only; a value that no longer
    // occurs verbatim is a no-op.
    for tag in &tags {
        description = description.replacen(&tag.render(), "", 1);
    }
    let description = collapse_whitespace(&description);

    let today = Utc::now().date_naive();
    let (completion_date, creation_date) = match dates.as_slice() {
        [] => (None, today),
        // A lone date on a completed line is its completion date; on a
        // pending line it is the creation date.
        [single] if done => (Some(*single), today),
        [single] => (None, *single),
        // Two dates: completion precedes creation.
        [first, second, ..] => (Some(*first), *second),
    };

    Ok(Entry {
        done,
        priority,
        completion_date,
        creation_date,
        description,
        tags,
        original: original.to_string(),
    })
}

fn split_key_value(raw: &str) -> Result<Tag, ParseError> {
    let Some((key, value)) = raw.split_once(KV_SEPARATOR) else {
        return Err(ParseError::MalformedLine(format!(
            "key-value tag {raw:?} has no separator"
        )));
    };
    if value.is_empty() || value == KV_SEPARATOR.to_string() {
        return Err(ParseError::EmptyValue(key.to_string()));
    }
    Ok(Tag::KeyValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Remove the completion marker and its whole separator run from the
/// front of the baseline description.
fn strip_done_prefix(description: &str) -> String {
    let mut chars = description.chars();
    match (chars.next(), chars.next()) {
        (Some(DONE_MARKER), Some(sep)) if sep.is_whitespace() => {
            chars.as_str().trim_start().to_string()
        }
        _ => description.to_string(),
    }
}

/// Collapse internal whitespace runs to single separators and trim.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
