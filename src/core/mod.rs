//! Core todo.txt parsing, rendering, and filtering.
//!
//! This module owns the line format: the scanner and token interpreters,
//! the entry assembler, the canonical renderer, and pure filtering helpers
//! over parsed entries.

mod entry;
pub mod filter;
mod parser;
mod scanner;

pub use entry::{Entry, Tag};
pub use parser::parse;
pub use scanner::{scan, Token};
