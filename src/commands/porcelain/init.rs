use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            writeln!(self.writer(), "Repository already initialized.")?;
            return Ok(());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .fool/objects directory")?;

        // start with an empty staging area
        fs::write(self.index().path(), b"").context("Failed to create .fool/index file")?;

        writeln!(
            self.writer(),
            "Initialized empty fool repository in {}/",
            self.repository_path().display()
        )?;

        Ok(())
    }
}
