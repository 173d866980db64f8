//! Staging area
//!
//! The index tracks which files go into the next commit, in the order they
//! were staged. It is persisted to `.fool/index` as newline-separated text
//! (see `artifacts::index`).
//!
//! Every update rewrites the whole file through a temporary sibling that is
//! renamed over the index, so readers see either the old or the new content.

use crate::artifacts::index::{decode_paths, encode_paths};
use crate::errors::{RepositoryError, RepositoryResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Staged file paths
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.fool/index`)
    path: Box<Path>,
    /// Repository-relative paths in staging order
    entries: Vec<String>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    /// Create a new empty index
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the index file (typically `.fool/index`)
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing index file is the same as an empty one.
    pub fn rehydrate(&mut self) -> RepositoryResult<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(RepositoryError::io(&self.path))?;
        self.entries = decode_paths(&content);

        debug!(entries = self.entries.len(), "index rehydrated");

        Ok(())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    /// Append a path to the staged set
    ///
    /// Fails with `AlreadyStaged` without touching the entries if the path is
    /// present already.
    pub fn add(&mut self, path: String) -> RepositoryResult<()> {
        if self.contains(&path) {
            return Err(RepositoryError::AlreadyStaged(path));
        }

        self.entries.push(path);
        self.changed = true;

        Ok(())
    }

    pub fn remove(&mut self, path: &str) {
        let len = self.entries.len();
        self.entries.retain(|entry| entry != path);
        self.changed |= self.entries.len() != len;
    }

    /// Unstage everything
    pub fn clear(&mut self) {
        self.changed |= !self.entries.is_empty();
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Persist the staged paths, replacing the index file in full
    ///
    /// Nothing is written when the entries did not change since the last load
    /// or write.
    pub fn write_updates(&mut self) -> RepositoryResult<()> {
        if !self.changed {
            return Ok(());
        }

        let content = encode_paths(self.entries());
        let staging_path = self.staging_path();

        std::fs::write(&staging_path, content).map_err(RepositoryError::io(&staging_path))?;
        std::fs::rename(&staging_path, &self.path).map_err(RepositoryError::io(&self.path))?;

        debug!(entries = self.entries.len(), "index written");
        self.changed = false;

        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}
