use crate::common::command::{empty_repository_dir, fool_commit_at, run_fool_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_log_with_multi_line_message(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = empty_repository_dir;

    for (name, message) in [
        ("a.txt", "Subject line\n\nBody after a blank line"),
        ("b.txt", "Second commit"),
    ] {
        write_file(FileSpec::new(
            repository_dir.path().join(name),
            name.to_string(),
        ));
        run_fool_command(repository_dir.path(), &["add", name])
            .assert()
            .success();
        fool_commit_at(repository_dir.path(), message, "2026-10-18T10:00:00+02:00")
            .assert()
            .success();
    }

    let actual_output = stdout_of(run_fool_command(repository_dir.path(), &["log"]))?;
    let blocks = actual_output.split("\n\n").collect::<Vec<_>>();

    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("Message: Second commit\nFile: b.txt"));
    assert!(blocks[1].contains(
        "Date: 2026-10-18T08:00:00Z\n\
        Message: Subject line\n    \n    Body after a blank line\n\
        File: a.txt"
    ));

    // only the newest commit counts as tracked
    run_fool_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("No files staged for commit.\nUntracked files:\n    a.txt\n");

    Ok(())
}
