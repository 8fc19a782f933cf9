//! Line-oriented file store for todo entries.
//!
//! The store is append-only for creation and rewrite-based for deletion:
//! deleting an entry skips the first matching line and rewrites the rest
//! to a temporary file that is renamed over the store.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::{parse, Entry};
use crate::error::RodoError;

/// Handle to the todo.txt backing file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open a store at the given path. The file is created lazily on the
    /// first append.
    #[must_use]
    pub fn open_at(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a rendered line plus a line terminator.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, entry: &Entry) -> Result<(), RodoError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                RodoError::Storage(format!("failed to open {}: {e}", self.path.display()))
            })?;

        writeln!(file, "{}", entry.render()).map_err(|e| {
            RodoError::Storage(format!("failed to write {}: {e}", self.path.display()))
        })
    }

    /// Read the lines of the store, skipping blank lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read. A missing file is an
    /// empty store.
    pub fn lines(&self) -> Result<Vec<String>, RodoError> {
        Ok(self
            .raw_lines()?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect())
    }

    /// Every line of the file as stored, blanks included, so callers can
    /// report positions in real line numbers.
    fn raw_lines(&self) -> Result<Vec<String>, RodoError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            RodoError::Storage(format!("failed to read {}: {e}", self.path.display()))
        })?;

        Ok(contents.lines().map(str::to_string).collect())
    }

    /// Load and parse every line of the store.
    ///
    /// # Errors
    ///
    /// Returns the first parse failure together with its one-based line
    /// number in the file; the caller decides whether a bad line aborts
    /// the operation.
    pub fn load(&self) -> Result<Vec<Entry>, RodoError> {
        let mut entries = Vec::new();
        for (number, line) in self.raw_lines()?.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry = parse(line).map_err(|e| {
                RodoError::Storage(format!(
                    "{}:{}: {e}",
                    self.path.display(),
                    number + 1
                ))
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Remove the first line containing `text` (case-insensitive) and
    /// rewrite the store without it. Returns the removed line, or `None`
    /// when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or rewritten.
    pub fn delete_first(&self, text: &str) -> Result<Option<String>, RodoError> {
        let lines = self.lines()?;
        let needle = text.to_lowercase();

        let Some(position) = lines
            .iter()
            .position(|line| line.to_lowercase().contains(&needle))
        else {
            return Ok(None);
        };

        let mut remaining = lines;
        let removed = remaining.remove(position);
        self.rewrite(&remaining)?;
        Ok(Some(removed))
    }

    /// Replace the store contents with the given lines, going through a
    /// temporary file so a failed write never truncates the store.
    fn rewrite(&self, lines: &[String]) -> Result<(), RodoError> {
        let tmp = self.path.with_extension("tmp");

        {
            let mut file = std::fs::File::create(&tmp).map_err(|e| {
                RodoError::Storage(format!("failed to create {}: {e}", tmp.display()))
            })?;
            for line in lines {
                writeln!(file, "{line}").map_err(|e| {
                    RodoError::Storage(format!("failed to write {}: {e}", tmp.display()))
                })?;
            }
        }

        std::fs::rename(&tmp, &self.path).map_err(|e| {
            RodoError::Storage(format!(
                "failed to replace {}: {e}",
                self.path.display()
            ))
        })
    }
}
