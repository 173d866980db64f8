use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileChangeType;

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let status_info = match self.file_status().initialize() {
            Ok(status_info) => status_info,
            Err(err) => {
                writeln!(self.writer(), "Error reading repository state: {err}")?;
                return Ok(());
            }
        };

        let staged_files = status_info.files(FileChangeType::Staged);
        if staged_files.is_empty() {
            writeln!(self.writer(), "No files staged for commit.")?;
        } else {
            self.show_section(FileChangeType::Staged, staged_files.iter())?;
        }

        for change in [FileChangeType::Untracked, FileChangeType::Modified] {
            let files = status_info.files(change);
            if !files.is_empty() {
                self.show_section(change, files.iter())?;
            }
        }

        Ok(())
    }

    fn show_section<'f>(
        &self,
        change: FileChangeType,
        files: impl Iterator<Item = &'f String>,
    ) -> anyhow::Result<()> {
        writeln!(self.writer(), "{change}")?;
        for file in files {
            writeln!(self.writer(), "{}", change.entry(file))?;
        }

        Ok(())
    }
}
