//! Commit log file format
//!
//! The log is an append-only text file of commit blocks, oldest first.
//! Every block ends with a newline and is followed by one blank line:
//!
//! ```text
//! commit 834bc2b1
//! Date: 2026-10-18T09:14:03Z
//! Message: m1
//! File: foo.txt
//!
//! commit 0f12aa9e
//! ...
//! ```
//!
//! - `head_state`: the last commit's id and file set, as seen by status

pub mod head_state;

/// Delimiter between two consecutive commit blocks
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// Split the log content into its commit blocks, oldest first
///
/// The returned blocks carry no trailing newline; empty blocks (from a
/// trailing separator or stray blank lines) are dropped.
pub fn split_entries(content: &str) -> Vec<&str> {
    content
        .split(ENTRY_SEPARATOR)
        .map(|block| block.trim_matches('\n'))
        .filter(|block| !block.is_empty())
        .collect()
}

/// Render a serialized commit block as it is appended to the log
pub fn encode_entry(block: &str) -> String {
    format!("{}{}", block.trim_end_matches('\n'), ENTRY_SEPARATOR)
}
