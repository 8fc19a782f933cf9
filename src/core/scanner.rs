//! Scanner and token interpreters for todo.txt lines.
//!
//! The scanner walks a zero-based character cursor over the line and
//! classifies structural markers into tokens. Motion is strictly forward,
//! with one bounded exception: the key-value interpreter looks back over
//! the non-whitespace run immediately preceding a colon to find the tag's
//! key. Each interpreter receives the cursor and returns the recognized
//! token together with the next cursor position.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::entry::{
    CONTEXT_MARKER, DATE_SEPARATOR, DONE_MARKER, KV_SEPARATOR, PRIORITY_CLOSE, PRIORITY_OPEN,
    PROJECT_MARKER,
};
use crate::error::ParseError;

/// Digits in the year component of a date token.
const YEAR_LEN: usize = 4;
/// Digits in the month and day components of a date token.
const PART_LEN: usize = 2;

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

/// An intermediate classified fragment produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The raw line, kept as the baseline description text. The assembler
    /// subtracts every recognized token span from it.
    Text(String),
    /// Completion marker standing alone, with its character offset.
    Done {
        /// Character offset of the marker in the line.
        offset: usize,
    },
    /// Parenthesized priority letter.
    Priority {
        /// The uppercase letter inside the parentheses.
        letter: char,
        /// Character offset of the opening parenthesis.
        offset: usize,
    },
    /// A `YYYY-MM-DD` date value.
    Date(String),
    /// Project tag value, marker excluded.
    Project(String),
    /// Context tag value, marker excluded.
    Context(String),
    /// Raw `key:value` text of a key-value tag.
    KeyValue(String),
}

/// Scan a line into an ordered token sequence.
///
/// The first token is always the full line as [`Token::Text`]; structural
/// tokens follow in positional order. Scanning is single-pass and linear
/// in the line length.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPriority`] for a malformed priority marker,
/// [`ParseError::InvalidDate`] for a dash that does not anchor a
/// `YYYY-MM-DD` token, and [`ParseError::MalformedLine`] when a structural
/// marker is truncated by the end of the line.
pub fn scan(line: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = vec![Token::Text(line.to_string())];
    let mut cursor = 0;

    while cursor < chars.len() {
        match chars[cursor] {
            DONE_MARKER if stands_alone(&chars, cursor) => {
                tokens.push(Token::Done { offset: cursor });
                cursor += 1;
            }
            PRIORITY_OPEN => {
                let (token, next) = priority(&chars, cursor)?;
                tokens.push(token);
                cursor = next;
            }
            DATE_SEPARATOR => {
                let (token, next) = date(&chars, cursor)?;
                tokens.push(token);
                cursor = next;
            }
            PROJECT_MARKER => {
                let (value, next) = marker_run(&chars, cursor);
                if value.is_empty() {
                    cursor += 1;
                } else {
                    tokens.push(Token::Project(value));
                    cursor = next;
                }
            }
            CONTEXT_MARKER => {
                let (value, next) = marker_run(&chars, cursor);
                if value.is_empty() {
                    cursor += 1;
                } else {
                    tokens.push(Token::Context(value));
                    cursor = next;
                }
            }
            KV_SEPARATOR => match key_value(&chars, cursor) {
                Some((token, next)) => {
                    tokens.push(token);
                    cursor = next;
                }
                // a colon with no key run is ordinary text
                None => cursor += 1,
            },
            _ => cursor += 1,
        }
    }

    Ok(tokens)
}

/// A completion marker counts only when bounded by the line start or
/// whitespace on the left and whitespace on the right.
fn stands_alone(chars: &[char], cursor: usize) -> bool {
    let at_word_start = cursor == 0 || chars[cursor - 1].is_whitespace();
    let followed_by_separator = chars
        .get(cursor + 1)
        .is_some_and(|c| c.is_whitespace());
    at_word_start && followed_by_separator
}

/// Priority interpreter: requires the three-character pattern `(X)` with
/// `X` a single uppercase letter.
fn priority(chars: &[char], cursor: usize) -> Result<(Token, usize), ParseError> {
    if cursor + 2 >= chars.len() {
        return Err(ParseError::MalformedLine(
            "priority marker truncated by end of line".to_string(),
        ));
    }
    let letter = chars[cursor + 1];
    if chars[cursor + 2] != PRIORITY_CLOSE || !letter.is_ascii_uppercase() {
        return Err(ParseError::InvalidPriority);
    }
    Ok((
        Token::Priority {
            letter,
            offset: cursor,
        },
        cursor + 3,
    ))
}

/// Date interpreter: reconstructs a `YYYY-MM-DD` candidate around the dash
/// at the cursor by reading four characters before it as the year, two
/// after it as the month, and, after skipping one separator, two more as
/// the day. The candidate is validated against the fixed digit shape.
fn date(chars: &[char], cursor: usize) -> Result<(Token, usize), ParseError> {
    // year-dash-month-separator-day
    let end = cursor + 1 + PART_LEN + 1 + PART_LEN;
    if cursor < YEAR_LEN || end > chars.len() {
        let raw: String = chars[cursor.saturating_sub(YEAR_LEN)..chars.len().min(end)]
            .iter()
            .collect();
        return Err(ParseError::InvalidDate(raw));
    }

    let year: String = chars[cursor - YEAR_LEN..cursor].iter().collect();
    let month: String = chars[cursor + 1..cursor + 1 + PART_LEN].iter().collect();
    let day: String = chars[cursor + 2 + PART_LEN..end].iter().collect();

    let candidate = format!("{year}{DATE_SEPARATOR}{month}{DATE_SEPARATOR}{day}");
    if !DATE_SHAPE.is_match(&candidate) {
        return Err(ParseError::InvalidDate(candidate));
    }

    Ok((Token::Date(candidate), end))
}

/// Project/context interpreter: consume the non-whitespace run following
/// the marker. An empty run means the marker is ordinary text.
fn marker_run(chars: &[char], cursor: usize) -> (String, usize) {
    let mut end = cursor + 1;
    while end < chars.len() && !chars[end].is_whitespace() {
        end += 1;
    }
    (chars[cursor + 1..end].iter().collect(), end)
}

/// Key-value interpreter. This is the single documented lookback: the key
/// is the longest non-whitespace run immediately preceding the colon,
/// bounded by the line start or whitespace. Returns `None` for a colon
/// with no key run.
fn key_value(chars: &[char], cursor: usize) -> Option<(Token, usize)> {
    let mut start = cursor;
    while start > 0 && !chars[start - 1].is_whitespace() {
        start -= 1;
    }
    if start == cursor {
        return None;
    }

    let mut end = cursor + 1;
    while end < chars.len() && !chars[end].is_whitespace() {
        end += 1;
    }

    let raw: String = chars[start..end].iter().collect();
    Some((Token::KeyValue(raw), end))
}
