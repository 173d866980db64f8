use crate::areas::repository::Repository;

impl Repository {
    /// Print every commit block, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let entries = match self.log_file().load_entries() {
            Ok(entries) => entries,
            Err(err) => {
                writeln!(self.writer(), "Error reading log: {err}")?;
                return Ok(());
            }
        };
        if entries.is_empty() {
            writeln!(self.writer(), "No commits yet.")?;
            return Ok(());
        }

        for (position, entry) in entries.iter().rev().enumerate() {
            if position > 0 {
                writeln!(self.writer())?;
            }
            writeln!(self.writer(), "{entry}")?;
        }

        Ok(())
    }
}
