//! Commit records
//!
//! A commit is a snapshot of the staged files plus a short metadata record.
//! The same text block describes a commit in the log and in the snapshot's
//! `meta.txt`:
//!
//! - `commit`: the `Commit` record and its block codec
//! - `commit_id`: short opaque identifiers derived with SHA-1

pub mod commit;
pub mod commit_id;

/// Length of a commit id in hexadecimal characters
pub const COMMIT_ID_LENGTH: usize = 8;
