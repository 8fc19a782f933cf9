//! rodo - a todo.txt task manager for the command line
//!
//! This crate parses, renders, filters, and stores task lines written in
//! the todo.txt format, one entry per line of plain text.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{parse, Entry, Tag};
pub use error::{ParseError, RodoError};
