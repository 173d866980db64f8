//! Commit identifier
//!
//! Commit ids are the first 8 hexadecimal characters of a SHA-1 digest over
//! the commit timestamp, the message and the snapshotted file contents.
//! They name the snapshot directory `.fool/objects/<id>`.
//!
//! Ids are opaque: nothing outside this module depends on how they are derived.

use crate::artifacts::objects::COMMIT_ID_LENGTH;
use crate::errors::{RepositoryError, RepositoryResult};
use sha1::{Digest, Sha1};

/// Short commit identifier (8 lowercase hex characters)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit id read back from the log
    pub fn try_parse(id: &str) -> RepositoryResult<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            return Err(RepositoryError::CorruptLog(format!(
                "invalid commit id length: {}",
                id.len()
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()) {
            return Err(RepositoryError::CorruptLog(format!(
                "invalid commit id characters: {id}"
            )));
        }
        Ok(Self(id.to_string()))
    }

    /// Derive the id of a new commit
    ///
    /// The digest covers `timestamp ++ message`, then `\0 path \0 content` for
    /// every snapshotted file in staging order. Two commits sharing timestamp
    /// and message only collide when they also store the same files.
    pub fn derive<'f>(
        timestamp: &str,
        message: &str,
        files: impl IntoIterator<Item = (&'f str, &'f [u8])>,
    ) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(timestamp.as_bytes());
        hasher.update(message.as_bytes());

        for (path, content) in files {
            hasher.update([0u8]);
            hasher.update(path.as_bytes());
            hasher.update([0u8]);
            hasher.update(content);
        }

        let digest = format!("{:x}", hasher.finalize());
        Self(digest[..COMMIT_ID_LENGTH].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
