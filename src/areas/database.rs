//! Snapshot store
//!
//! Every commit owns a directory `.fool/objects/<commit-id>/` holding a full
//! copy of each committed file at its repository-relative path, plus
//! `meta.txt`, a copy of the commit's log entry.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{RepositoryError, RepositoryResult};
use bytes::Bytes;
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the metadata file inside a snapshot directory
pub const META_FILE_NAME: &str = "meta.txt";

#[derive(Debug, new)]
pub struct Database {
    /// Path to the objects directory (typically `.fool/objects`)
    path: Box<Path>,
}

impl Database {
    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot_path(&self, commit_id: &CommitId) -> PathBuf {
        self.path.join(commit_id.as_str())
    }

    /// Whether a repository path would clash with the snapshot metadata file
    ///
    /// Anything below a top-level `meta.txt` directory clashes as well.
    pub fn is_reserved(file: &str) -> bool {
        file.split('/').next() == Some(META_FILE_NAME)
    }

    /// Copy file content into the snapshot of `commit_id`
    pub fn store_file(&self, commit_id: &CommitId, file: &str, data: &[u8]) -> RepositoryResult<()> {
        let object_path = self.snapshot_path(commit_id).join(file);

        if let Some(parent) = object_path.parent() {
            std::fs::create_dir_all(parent).map_err(RepositoryError::io(parent))?;
        }
        std::fs::write(&object_path, data).map_err(RepositoryError::io(&object_path))?;

        debug!(commit = %commit_id, path = file, bytes = data.len(), "snapshot file stored");

        Ok(())
    }

    /// Read a file back from the snapshot of `commit_id`
    pub fn load_file(&self, commit_id: &CommitId, file: &str) -> RepositoryResult<Bytes> {
        let object_path = self.snapshot_path(commit_id).join(file);

        std::fs::read(&object_path)
            .map(Bytes::from)
            .map_err(RepositoryError::io(&object_path))
    }

    /// Write `meta.txt` for a commit whose files are already stored
    pub fn store_meta(&self, commit: &Commit) -> RepositoryResult<()> {
        let snapshot_path = self.snapshot_path(commit.id());
        std::fs::create_dir_all(&snapshot_path).map_err(RepositoryError::io(&snapshot_path))?;

        let meta_path = snapshot_path.join(META_FILE_NAME);
        std::fs::write(&meta_path, commit.serialize()).map_err(RepositoryError::io(&meta_path))
    }
}
