use crate::common::command::{repository_dir, run_fool_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::add(&["add", "foo.txt"])]
#[case::commit(&["commit", "-m", "m1"])]
#[case::log(&["log"])]
#[case::status(&["status"])]
fn commands_fail_outside_a_repository(
    repository_dir: TempDir,
    #[case] args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        repository_dir.path().join("foo.txt"),
        "hello".to_string(),
    ));

    run_fool_command(repository_dir.path(), args)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: not a fool repository (run 'fool init' first)",
        ));

    assert!(!repository_dir.path().join(".fool").exists());

    Ok(())
}
