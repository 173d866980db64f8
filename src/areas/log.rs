//! Commit log
//!
//! The log (`.fool/log`) is the only record of history: it is appended to on
//! every commit and never rewritten. The newest entry is the current head.

use crate::artifacts::log::{encode_entry, split_entries};
use crate::artifacts::objects::commit::Commit;
use crate::errors::{RepositoryError, RepositoryResult};
use derive_new::new;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Debug, new)]
pub struct Log {
    /// Path to the log file (typically `.fool/log`)
    path: Box<Path>,
}

impl Log {
    /// Read the raw commit blocks, oldest first
    ///
    /// A missing log means nothing was committed yet.
    pub fn load_entries(&self) -> RepositoryResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(RepositoryError::io(&self.path))?;

        Ok(split_entries(&content)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Parse the newest entry of the log
    pub fn head(&self) -> RepositoryResult<Option<Commit>> {
        self.load_entries()?
            .last()
            .map(|block| Commit::deserialize(block))
            .transpose()
    }

    /// Append a commit entry to the end of the log
    pub fn append(&self, commit: &Commit) -> RepositoryResult<()> {
        let mut log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(RepositoryError::io(&self.path))?;

        log_file
            .write_all(encode_entry(&commit.serialize()).as_bytes())
            .map_err(RepositoryError::io(&self.path))?;

        debug!(commit = %commit.id(), "log entry appended");

        Ok(())
    }
}
