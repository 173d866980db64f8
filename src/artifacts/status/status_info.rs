use crate::areas::repository::Repository;
use crate::artifacts::log::head_state::HeadState;
use crate::artifacts::status::file_change::FileChangeType;
use crate::errors::RepositoryResult;
use derive_new::new;
use std::collections::BTreeSet;
use tracing::debug;

pub type FileSet = BTreeSet<String>;

/// Files listed by `status`, grouped by section and sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) staged_files: FileSet,
    pub(crate) untracked_files: FileSet,
    pub(crate) modified_files: FileSet,
}

impl StatusInfo {
    /// Classify files from the staged set, the last commit and the workspace
    ///
    /// - staged: every path in the index
    /// - untracked: workspace files neither staged nor in the last commit
    /// - modified: committed, unstaged files for which `is_modified` answers
    ///   `Some(true)`; `None` means the comparison could not be made and the
    ///   file is left out
    pub fn reconcile<'f>(
        staged: impl IntoIterator<Item = &'f str>,
        head: &HeadState,
        workspace_files: impl IntoIterator<Item = &'f str>,
        mut is_modified: impl FnMut(&str) -> Option<bool>,
    ) -> Self {
        let staged_files = staged.into_iter().map(str::to_string).collect::<FileSet>();

        let untracked_files = workspace_files
            .into_iter()
            .filter(|file| !staged_files.contains(*file) && !head.contains(*file))
            .map(str::to_string)
            .collect::<FileSet>();

        let modified_files = head
            .files()
            .iter()
            .filter(|file| !staged_files.contains(file.as_str()))
            .filter(|file| is_modified(file.as_str()).unwrap_or(false))
            .cloned()
            .collect::<FileSet>();

        StatusInfo {
            staged_files,
            untracked_files,
            modified_files,
        }
    }

    pub fn files(&self, change: FileChangeType) -> &FileSet {
        match change {
            FileChangeType::Staged => &self.staged_files,
            FileChangeType::Untracked => &self.untracked_files,
            FileChangeType::Modified => &self.modified_files,
        }
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Gather the status of the repository's working directory
    pub fn initialize(&self) -> RepositoryResult<StatusInfo> {
        let mut index = self.repository.index();
        index.rehydrate()?;

        let head = self.repository.head_state()?;
        let workspace_files = self.repository.workspace().list_dir()?;

        let status_info = StatusInfo::reconcile(
            index.entries(),
            &head,
            workspace_files.iter().map(String::as_str),
            |file| self.is_content_changed(&head, file),
        );

        debug!(
            staged = status_info.staged_files.len(),
            untracked = status_info.untracked_files.len(),
            modified = status_info.modified_files.len(),
            "status reconciled"
        );

        Ok(status_info)
    }

    /// Compare the workspace copy of a committed file with its snapshot
    ///
    /// Returns `None` when either side cannot be read.
    fn is_content_changed(&self, head: &HeadState, file: &str) -> Option<bool> {
        let commit_id = head.commit_id()?;
        let workspace_data = self.repository.workspace().read_file(file).ok()?;
        let snapshot_data = self.repository.database().load_file(commit_id, file).ok()?;

        Some(workspace_data != snapshot_data)
    }
}
