//! Commit record
//!
//! Commits are immutable once written. They contain:
//! - The commit id (see `commit_id`)
//! - The UTC timestamp of the commit
//! - The commit message
//! - The repository-relative paths stored in the snapshot
//!
//! ## Format
//!
//! In the log and in `meta.txt`:
//! ```text
//! commit <id>
//! Date: <RFC3339 timestamp>
//! Message: <first message line>
//!     <next message line>
//! File: <path>
//! File: <path>
//! ```
//!
//! Message continuation lines are indented by four spaces, so an empty
//! message line never reads as the blank line separating log entries.
//! Paths are one per line and cannot contain a line break, which keeps names
//! with spaces, commas or brackets intact.

use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{RepositoryError, RepositoryResult};
use chrono::{DateTime, SecondsFormat, Utc};
use derive_new::new;
use regex::Regex;

const ENTRY_LINE_REGEX: &str =
    r"^(?:(?P<key>commit|Date:|Message:|File:) (?P<value>.*)|    (?P<continuation>.*))$";

const MESSAGE_INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    id: CommitId,
    timestamp: DateTime<Utc>,
    message: String,
    files: Vec<String>,
}

impl Commit {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    /// Timestamp as written to disk, e.g. `2026-10-18T09:14:03Z`
    pub fn readable_timestamp(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Render the commit block, every line terminated by a newline
    pub fn serialize(&self) -> String {
        let mut lines = vec![
            format!("commit {}", self.id),
            format!("Date: {}", self.readable_timestamp()),
        ];

        let mut message_lines = self.message.split('\n');
        lines.push(format!(
            "Message: {}",
            message_lines.next().unwrap_or_default()
        ));
        lines.extend(message_lines.map(|line| format!("{MESSAGE_INDENT}{line}")));

        lines.extend(self.files.iter().map(|file| format!("File: {file}")));

        lines.into_iter().map(|line| line + "\n").collect()
    }

    /// Parse a commit block produced by `serialize`
    pub fn deserialize(block: &str) -> RepositoryResult<Self> {
        let entry_line = Regex::new(ENTRY_LINE_REGEX)?;

        let mut id = None;
        let mut timestamp = None;
        let mut message: Option<String> = None;
        let mut in_message = false;
        let mut files = Vec::new();

        for line in block.split('\n').filter(|line| !line.is_empty()) {
            let captures = entry_line.captures(line).ok_or_else(|| {
                RepositoryError::CorruptLog(format!("unexpected line: {line:?}"))
            })?;

            if let Some(continuation) = captures.name("continuation") {
                match message.as_mut() {
                    Some(message) if in_message => {
                        message.push('\n');
                        message.push_str(continuation.as_str());
                    }
                    _ => {
                        return Err(RepositoryError::CorruptLog(format!(
                            "indented line outside of a message: {line:?}"
                        )));
                    }
                }
                continue;
            }

            let key = captures.name("key").map(|m| m.as_str());
            let value = captures.name("value").map(|m| m.as_str()).unwrap_or_default();
            in_message = key == Some("Message:");

            match key {
                Some("commit") => id = Some(CommitId::try_parse(value)?),
                Some("Date:") => timestamp = Some(parse_timestamp(value)?),
                Some("Message:") => message = Some(value.to_string()),
                Some("File:") => files.push(value.to_string()),
                _ => {
                    return Err(RepositoryError::CorruptLog(format!(
                        "unexpected line: {line:?}"
                    )));
                }
            }
        }

        let id = id.ok_or_else(|| RepositoryError::CorruptLog("missing commit id".into()))?;
        let timestamp = timestamp.ok_or_else(|| {
            RepositoryError::CorruptLog(format!("missing date for commit {id}"))
        })?;
        let message = message.ok_or_else(|| {
            RepositoryError::CorruptLog(format!("missing message for commit {id}"))
        })?;

        Ok(Commit::new(id, timestamp, message, files))
    }
}

/// Format a timestamp the way commits store it (RFC3339, seconds, `Z`)
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_timestamp(value: &str) -> RepositoryResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|err| RepositoryError::CorruptLog(format!("invalid date {value:?}: {err}")))
}
