use crate::common::command::{empty_repository_dir, read_index, run_fool_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_a_staged_file_twice_is_reported(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = empty_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("foo.txt"),
        "hello".to_string(),
    ));

    run_fool_command(repository_dir.path(), &["add", "foo.txt"])
        .assert()
        .success();

    run_fool_command(repository_dir.path(), &["add", "./foo.txt", "foo.txt"])
        .assert()
        .success()
        .stdout("File 'foo.txt' is already staged.\nFile 'foo.txt' is already staged.\n");

    assert_eq!(read_index(repository_dir.path())?, "foo.txt\n");

    Ok(())
}
