use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::errors::{RepositoryError, RepositoryResult};
use tracing::debug;

const ADD_USAGE: &str = "Usage: fool add <file>...";

impl Repository {
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        if paths.is_empty() {
            writeln!(self.writer(), "{ADD_USAGE}")?;
            return Ok(());
        }

        let mut index = self.index();
        // Load the index file from the disk
        if let Err(err) = index.rehydrate() {
            writeln!(self.writer(), "Error reading index: {err}")?;
            return Ok(());
        }

        for path in paths {
            let files = match self.workspace().resolve(path) {
                Ok(files) => files,
                Err(err) => {
                    self.report_add_failure(&err)?;
                    continue;
                }
            };

            if files.is_empty() {
                writeln!(self.writer(), "No files to add in '{path}'.")?;
                continue;
            }

            for file in files {
                match Self::stage_file(&mut index, &file) {
                    Ok(()) => writeln!(self.writer(), "Added '{file}' to staging area.")?,
                    Err(err) => self.report_add_failure(&err)?,
                }
            }
        }

        Ok(())
    }

    /// Stage one resolved file and persist the index
    ///
    /// The index on disk either gains the file or stays as it was.
    fn stage_file(index: &mut Index, file: &str) -> RepositoryResult<()> {
        if Database::is_reserved(file) {
            return Err(RepositoryError::invalid_path(
                file,
                "name is reserved for commit metadata",
            ));
        }

        index.add(file.to_string())?;

        if let Err(err) = index.write_updates() {
            index.remove(file);
            return Err(err);
        }

        debug!(path = file, staged = index.len(), "file staged");

        Ok(())
    }

    fn report_add_failure(&self, err: &RepositoryError) -> anyhow::Result<()> {
        match err {
            RepositoryError::NotFound(path) => {
                writeln!(self.writer(), "File '{path}' does not exist.")?
            }
            RepositoryError::AlreadyStaged(path) => {
                writeln!(self.writer(), "File '{path}' is already staged.")?
            }
            RepositoryError::InvalidPath { path, reason } => {
                writeln!(self.writer(), "Invalid path '{path}': {reason}")?
            }
            err => writeln!(self.writer(), "Error updating index: {err}")?,
        }

        Ok(())
    }
}
