use crate::common::command::{empty_repository_dir, read_index, run_fool_command};
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_single_file_to_index_successfully(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = empty_repository_dir;

    let file_name = format!("{}.txt", Word().fake::<String>());
    let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
    repository_dir.child(&file_name).write_str(&file_content)?;

    run_fool_command(repository_dir.path(), &["add", &file_name])
        .assert()
        .success()
        .stdout(format!("Added '{file_name}' to staging area.\n"));

    assert_eq!(read_index(repository_dir.path())?, format!("{file_name}\n"));
    assert!(!repository_dir.path().join(".fool").join("index.tmp").exists());

    Ok(())
}
