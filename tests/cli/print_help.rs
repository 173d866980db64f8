use crate::common::command::{repository_dir, run_fool_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::help_subcommand(&["help"])]
#[case::help_flag(&["--help"])]
fn print_help(repository_dir: TempDir, #[case] args: &[&str]) {
    let mut assert = run_fool_command(repository_dir.path(), args)
        .assert()
        .success();

    for command in ["init", "add", "commit", "log", "status", "version"] {
        assert = assert.stdout(predicate::str::contains(command));
    }
}

#[rstest]
fn print_help_without_a_command(repository_dir: TempDir) {
    run_fool_command(repository_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("commit"));

    assert!(!repository_dir.path().join(".fool").exists());
}

#[rstest]
fn print_help_for_a_command(repository_dir: TempDir) {
    run_fool_command(repository_dir.path(), &["help", "commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--message"));
}
