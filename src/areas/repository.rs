use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::log::Log;
use crate::areas::workspace::Workspace;
use crate::artifacts::log::head_state::HeadState;
use crate::artifacts::status::status_info::Status;
use crate::errors::{RepositoryError, RepositoryResult};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the repository metadata directory
pub const REPOSITORY_DIR: &str = ".fool";

/// Handle on a repository rooted at a working directory
///
/// All commands run against one handle, built once per process from the root
/// path and the writer that receives user-facing output.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    log: Log,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }

        let path = path.canonicalize()?;
        let repository_path = path.join(REPOSITORY_DIR);

        let index = Index::new(repository_path.join("index").into_boxed_path());
        let database = Database::new(repository_path.join("objects").into_boxed_path());
        let log = Log::new(repository_path.join("log").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            log,
        })
    }

    /// Path to the `.fool` metadata directory
    pub fn repository_path(&self) -> Box<Path> {
        self.path.join(REPOSITORY_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn log_file(&self) -> &Log {
        &self.log
    }

    pub fn file_status(&'_ self) -> Status<'_> {
        Status::new(self)
    }

    pub fn is_initialized(&self) -> bool {
        self.repository_path().is_dir()
    }

    /// Guard for every command that needs an existing repository
    pub fn ensure_initialized(&self) -> RepositoryResult<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::NotInitialized)
        }
    }

    /// Id and file set of the newest commit in the log
    pub fn head_state(&self) -> RepositoryResult<HeadState> {
        Ok(self.log.head()?.into())
    }
}
