use crate::common::command::{init_repository_dir, run_fool_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_nothing_staged_when_no_files_are_changed(init_repository_dir: TempDir) {
    run_fool_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("No files staged for commit.\n");
}
