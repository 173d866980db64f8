use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use std::collections::BTreeSet;

/// Snapshot of the newest log entry
///
/// There is no HEAD pointer on disk: the last commit block of the log is the
/// current head. An empty log yields a state with no id and no files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadState {
    commit_id: Option<CommitId>,
    files: BTreeSet<String>,
}

impl HeadState {
    pub fn commit_id(&self) -> Option<&CommitId> {
        self.commit_id.as_ref()
    }

    pub fn files(&self) -> &BTreeSet<String> {
        &self.files
    }

    pub fn contains(&self, file: &str) -> bool {
        self.files.contains(file)
    }
}

impl From<Option<Commit>> for HeadState {
    fn from(commit: Option<Commit>) -> Self {
        match commit {
            Some(commit) => HeadState {
                commit_id: Some(commit.id().clone()),
                files: commit.files().iter().cloned().collect(),
            },
            None => HeadState::default(),
        }
    }
}
