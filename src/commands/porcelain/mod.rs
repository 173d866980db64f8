//! User-facing commands
//!
//! Every command is a method on `Repository` that writes its report to the
//! repository writer. Logical failures (nothing to commit, file already
//! staged, ...) are reported as text; a missing repository and failures to
//! write repository metadata are returned as errors.
//!
//! ## Commands
//!
//! - `init`: Create the `.fool` directory
//! - `add`: Stage files for commit
//! - `commit`: Snapshot the staged files
//! - `status`: Show staged, untracked and modified files
//! - `log`: Show commit history, newest first

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
