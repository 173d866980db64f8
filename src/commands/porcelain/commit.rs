use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, format_timestamp};
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{RepositoryError, RepositoryResult};
use bytes::Bytes;
use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, warn};

const COMMIT_USAGE: &str = "Usage: fool commit -m <message>";

/// Environment variable overriding the commit timestamp (RFC 3339)
pub const COMMIT_DATE_ENV: &str = "FOOL_COMMIT_DATE";

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let message = message.trim();
        if message.is_empty() {
            writeln!(self.writer(), "{COMMIT_USAGE}")?;
            return Ok(());
        }

        let mut warnings = Vec::new();
        let result = self.create_commit(message, &mut warnings);

        for warning in &warnings {
            writeln!(self.writer(), "{warning}")?;
        }

        match result {
            Ok(commit) => writeln!(
                self.writer(),
                "Committed {} file(s) with id {}",
                commit.files().len(),
                commit.id()
            )?,
            Err(RepositoryError::EmptyIndex) => {
                writeln!(self.writer(), "Nothing to commit. Staging area is empty.")?
            }
            Err(RepositoryError::NoFilesCommitted) => {
                writeln!(self.writer(), "No files were committed.")?
            }
            Err(err) => writeln!(self.writer(), "Error recording commit: {err}")?,
        }

        Ok(())
    }

    /// Snapshot the staged files and record the commit
    ///
    /// Files that cannot be read or copied are skipped and a warning line is
    /// pushed to `warnings`. The
    /// snapshot and `meta.txt` are written before the log entry, and the index
    /// is cleared last, so an interrupted commit never leaves a log entry
    /// without its snapshot.
    fn create_commit(&self, message: &str, warnings: &mut Vec<String>) -> RepositoryResult<Commit> {
        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            return Err(RepositoryError::EmptyIndex);
        }

        let timestamp = commit_timestamp();

        let mut contents: Vec<(String, Bytes)> = Vec::with_capacity(index.len());
        for file in index.entries() {
            match self.workspace().read_file(file) {
                Ok(data) => contents.push((file.to_string(), data)),
                Err(err) => {
                    warn!(path = file, error = %err, "staged file unreadable");
                    warnings.push(format!("Warning: could not read '{file}', skipping."));
                }
            }
        }

        let commit_id = CommitId::derive(
            &format_timestamp(&timestamp),
            message,
            contents
                .iter()
                .map(|(file, data)| (file.as_str(), data.as_ref())),
        );

        let mut files = Vec::with_capacity(contents.len());
        for (file, data) in &contents {
            match self.database().store_file(&commit_id, file, data) {
                Ok(()) => files.push(file.clone()),
                Err(err) => {
                    warn!(path = %file, error = %err, "snapshot file not written");
                    warnings.push(format!("Warning: could not write '{file}', skipping."));
                }
            }
        }

        if files.is_empty() {
            return Err(RepositoryError::NoFilesCommitted);
        }

        let commit = Commit::new(commit_id, timestamp, message.to_string(), files);

        self.database().store_meta(&commit)?;
        self.log_file().append(&commit)?;

        index.clear();
        index.write_updates()?;

        debug!(commit = %commit.id(), files = commit.files().len(), "commit recorded");

        Ok(commit)
    }
}

/// Current time truncated to whole seconds, unless overridden by the environment
fn commit_timestamp() -> DateTime<Utc> {
    std::env::var(COMMIT_DATE_ENV)
        .ok()
        .and_then(|value| match DateTime::parse_from_rfc3339(value.trim()) {
            Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
            Err(err) => {
                warn!(value = %value, error = %err, "ignoring invalid {COMMIT_DATE_ENV}");
                None
            }
        })
        .unwrap_or_else(Utc::now)
        .trunc_subsecs(0)
}
