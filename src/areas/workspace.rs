use crate::errors::{RepositoryError, RepositoryResult};
use bytes::Bytes;
use std::path::{Component, Path};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 2] = [".fool", ".git"];

/// Characters a tracked path cannot contain, as the index and log are line based
const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// The working directory the repository tracks
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Resolve a user-supplied path into repository-relative file names
    ///
    /// Files resolve to themselves; directories expand to every file below
    /// them, in name order, skipping the metadata directories.
    pub fn resolve(&self, path: &str) -> RepositoryResult<Vec<String>> {
        if path.contains(LINE_BREAKS) {
            return Err(RepositoryError::invalid_path(path, "path contains a line break"));
        }

        let absolute_path = self.path.join(path);
        if !absolute_path.exists() {
            return Err(RepositoryError::NotFound(path.to_string()));
        }

        let absolute_path = absolute_path
            .canonicalize()
            .map_err(RepositoryError::io(&absolute_path))?;
        let relative_path = absolute_path
            .strip_prefix(&self.path)
            .map_err(|_| RepositoryError::invalid_path(path, "outside the repository"))?;

        if Self::is_ignored(relative_path) {
            return Err(RepositoryError::invalid_path(
                path,
                "inside a repository metadata directory",
            ));
        }

        if !absolute_path.is_dir() {
            return Ok(vec![Self::to_file_name(path, relative_path)?]);
        }

        WalkDir::new(&absolute_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !IGNORED_PATHS.contains(&entry.file_name().to_string_lossy().as_ref())
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let relative_path = entry.path().strip_prefix(&self.path).map_err(|_| {
                    RepositoryError::invalid_path(path, "outside the repository")
                })?;
                Self::to_file_name(path, relative_path)
            })
            .collect()
    }

    /// List the files at the top level of the working directory, in name order
    ///
    /// Directories and the metadata directories are left out.
    pub fn list_dir(&self) -> RepositoryResult<Vec<String>> {
        let mut files = std::fs::read_dir(&self.path)
            .map_err(RepositoryError::io(&self.path))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| !entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| !IGNORED_PATHS.contains(&name.as_str()))
            .collect::<Vec<_>>();

        files.sort();

        Ok(files)
    }

    pub fn read_file(&self, file: &str) -> RepositoryResult<Bytes> {
        let file_path = self.path.join(file);

        std::fs::read(&file_path)
            .map(Bytes::from)
            .map_err(RepositoryError::io(&file_path))
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(name) => IGNORED_PATHS.contains(&name.to_string_lossy().as_ref()),
            _ => false,
        })
    }

    /// Join the components of a relative path with `/`
    fn to_file_name(path: &str, relative_path: &Path) -> RepositoryResult<String> {
        let components = relative_path
            .components()
            .map(|component| match component {
                Component::Normal(name) => name.to_str().ok_or_else(|| {
                    RepositoryError::invalid_path(path, "file name is not valid UTF-8")
                }),
                _ => Err(RepositoryError::invalid_path(path, "not a plain relative path")),
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        let file_name = components.join("/");
        if file_name.is_empty() {
            return Err(RepositoryError::invalid_path(path, "not a file"));
        }
        if file_name.contains(LINE_BREAKS) {
            return Err(RepositoryError::invalid_path(path, "path contains a line break"));
        }

        Ok(file_name)
    }
}
