use crate::common::command::{repository_dir, run_fool_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::unknown_command(&["push"])]
#[case::unknown_flag(&["log", "--oneline"])]
fn reject_unknown_commands(repository_dir: TempDir, #[case] args: &[&str]) {
    run_fool_command(repository_dir.path(), args)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    assert!(!repository_dir.path().join(".fool").exists());
}
