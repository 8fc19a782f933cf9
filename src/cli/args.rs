//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// rodo - a todo.txt manager for the command line
#[derive(Parser, Debug)]
#[command(name = "rodo")]
#[command(author, version, about)]
#[command(long_about = "rodo - a todo.txt manager for the command line

Todos live in a plain todo.txt file, one entry per line. Lines carry an
optional done marker, priority, dates, +project and @context tags, and
key:value pairs.

QUICK START:
  rodo add \"call customer (A) +sales due:tomorrow\"
  rodo list
  rodo list --project sales
  rodo done \"call customer\"
  rodo delete \"call customer\"")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the todo.txt file (overrides config)
    #[arg(short, long, global = true, env = "RODO_FILE")]
    pub file: Option<PathBuf>,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output
    #[default]
    Pretty,
    /// JSON output for scripting
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo entry
    #[command(visible_alias = "a")]
    Add {
        /// The todo line, e.g. "call customer (A) +sales due:tomorrow"
        text: String,

        /// Parse and print the entry without storing it
        #[arg(long)]
        parse_only: bool,
    },

    /// List todo entries
    #[command(visible_alias = "ls")]
    List {
        /// Only entries tagged with this +project
        #[arg(short, long)]
        project: Option<String>,

        /// Only entries tagged with this @context
        #[arg(short, long)]
        context: Option<String>,

        /// Only entries carrying this key:value key
        #[arg(short, long)]
        key: Option<String>,

        /// Only completed entries
        #[arg(long, conflicts_with = "pending")]
        done: bool,

        /// Only pending entries
        #[arg(long)]
        pending: bool,
    },

    /// Mark the first matching entry as done
    #[command(visible_alias = "d")]
    Done {
        /// Text to match against entry descriptions (case-insensitive)
        text: String,
    },

    /// Delete the first matching entry
    #[command(visible_alias = "rm")]
    Delete {
        /// Text to match against entry descriptions (case-insensitive)
        text: String,
    },

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["rodo", "add", "walk dog +home"]).unwrap();
        match cli.command {
            Commands::Add { text, parse_only } => {
                assert_eq!(text, "walk dog +home");
                assert!(!parse_only);
            }
            _ => panic!("expected Add command"),
        }
    }

    #[test]
    fn test_parse_list_filters() {
        let cli =
            Cli::try_parse_from(["rodo", "list", "--project", "sales", "--pending"]).unwrap();
        match cli.command {
            Commands::List {
                project, pending, ..
            } => {
                assert_eq!(project.as_deref(), Some("sales"));
                assert!(pending);
            }
            _ => panic!("expected List command"),
        }
    }

    #[test]
    fn test_global_output_flag() {
        let cli = Cli::try_parse_from(["rodo", "list", "--output", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_file_flag() {
        let cli = Cli::try_parse_from(["rodo", "--file", "/tmp/t.txt", "list"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/t.txt")));
    }
}
