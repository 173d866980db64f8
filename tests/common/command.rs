use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Timestamp every test commit is recorded with, unless stated otherwise
pub const COMMIT_DATE: &str = "2026-10-18T09:14:03Z";

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with one commit of `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_fool_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_fool_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    fool_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

/// Freshly initialized repository without commits
#[fixture]
pub fn empty_repository_dir(repository_dir: TempDir) -> TempDir {
    run_fool_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

pub fn run_fool_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("fool").expect("Failed to find fool binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("FOOL_COMMIT_DATE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn fool_commit(dir: &Path, message: &str) -> Command {
    fool_commit_at(dir, message, COMMIT_DATE)
}

pub fn fool_commit_at(dir: &Path, message: &str, date: &str) -> Command {
    let mut cmd = run_fool_command(dir, &["commit", "-m", message]);
    cmd.env("FOOL_COMMIT_DATE", date);
    cmd
}

/// Run a command expected to succeed and return its stdout
pub fn stdout_of(mut cmd: Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success().get_output().stdout.clone();

    Ok(String::from_utf8(output)?)
}

/// Extract the commit id from a `Committed <n> file(s) with id <id>` line
pub fn committed_id(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find_map(|line| line.split_once(" with id "))
        .map(|(_, id)| id.trim().to_string())
}

pub fn read_index(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    Ok(std::fs::read_to_string(dir.join(".fool").join("index"))?)
}

pub fn read_log(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    Ok(std::fs::read_to_string(dir.join(".fool").join("log"))?)
}
