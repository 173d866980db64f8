use colored::{ColoredString, Colorize};

const LABEL_WIDTH: usize = 4;

/// Section of the status report a file is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileChangeType {
    /// In the staging index
    Staged,
    /// Neither staged nor part of the last commit
    Untracked,
    /// Committed, not staged, and different from its snapshot
    Modified,
}

impl From<&FileChangeType> for &str {
    fn from(change: &FileChangeType) -> Self {
        match change {
            FileChangeType::Staged => "Staged files:",
            FileChangeType::Untracked => "Untracked files:",
            FileChangeType::Modified => "Modified files:",
        }
    }
}

impl FileChangeType {
    /// Render one listed file, indented and coloured for its section
    pub fn entry(&self, file: &str) -> String {
        let colored_file: ColoredString = match self {
            FileChangeType::Staged => file.green(),
            FileChangeType::Untracked | FileChangeType::Modified => file.red(),
        };

        format!("{:>width$}{}", "", colored_file, width = LABEL_WIDTH)
    }
}

impl std::fmt::Display for FileChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header: &str = self.into();
        write!(f, "{}", header)
    }
}
