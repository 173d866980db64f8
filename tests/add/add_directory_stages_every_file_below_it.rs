use crate::common::command::{empty_repository_dir, read_index, run_fool_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_directory_stages_every_file_below_it(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = empty_repository_dir;

    for (path, content) in [
        ("1.txt", "one"),
        ("a/2.txt", "two"),
        ("a/b/3.txt", "three"),
        ("a/.git/config", "ignored"),
    ] {
        write_file(FileSpec::new(
            repository_dir.path().join(path),
            content.to_string(),
        ));
    }

    run_fool_command(repository_dir.path(), &["add", "a"])
        .assert()
        .success()
        .stdout("Added 'a/2.txt' to staging area.\nAdded 'a/b/3.txt' to staging area.\n");

    run_fool_command(repository_dir.path(), &["add", "."])
        .assert()
        .success()
        .stdout(
            "Added '1.txt' to staging area.\n\
            File 'a/2.txt' is already staged.\n\
            File 'a/b/3.txt' is already staged.\n",
        );

    assert_eq!(
        read_index(repository_dir.path())?,
        "a/2.txt\na/b/3.txt\n1.txt\n"
    );

    Ok(())
}
