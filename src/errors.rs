//! Error types shared by the repository areas.

use std::path::{Path, PathBuf};

/// Errors that can occur while operating on a repository.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The `.fool` directory does not exist in the repository root.
    #[error("not a fool repository (run 'fool init' first)")]
    NotInitialized,

    /// The referenced path does not exist on disk.
    #[error("path does not exist: {0}")]
    NotFound(String),

    /// The path is already present in the staging index.
    #[error("path already staged: {0}")]
    AlreadyStaged(String),

    /// The path cannot be tracked by the repository.
    #[error("invalid path {path}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// The staging index is absent or empty.
    #[error("nothing to commit, staging area is empty")]
    EmptyIndex,

    /// Every staged file was skipped while writing the snapshot.
    #[error("no files were committed")]
    NoFilesCommitted,

    /// A log block could not be parsed back into a commit.
    #[error("corrupt log entry: {0}")]
    CorruptLog(String),

    /// I/O failure on a specific path.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl RepositoryError {
    /// Build a `map_err` adapter attaching `path` to an I/O error.
    pub fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| RepositoryError::Io { path, source }
    }

    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        RepositoryError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias for repository results.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
