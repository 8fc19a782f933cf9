//! Path resolution for rodo configuration and data files.
//!
//! All rodo data is stored in `~/.rodo/`:
//! - `config.yaml` - Main configuration file
//! - `todos.txt` - The todo.txt line store

use std::path::PathBuf;

use crate::error::RodoError;

/// Paths to rodo configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.rodo/`
    pub root: PathBuf,
    /// Config file: `~/.rodo/config.yaml`
    pub config_file: PathBuf,
    /// Default todo store: `~/.rodo/todos.txt`
    pub store_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RodoError> {
        let home = std::env::var("HOME")
            .map_err(|_| RodoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".rodo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            store_file: root.join("todos.txt"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), RodoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                RodoError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".rodo"))
        })
    }
}
