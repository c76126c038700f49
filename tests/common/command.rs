use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Keeps both the binary's and the tests' `git` calls independent of the
/// machine's user and system configuration.
const GIT_ENV: [(&str, &str); 7] = [
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_CONFIG_NOSYSTEM", "1"),
    ("GIT_AUTHOR_NAME", "fake_user"),
    ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
    ("GIT_AUTHOR_DATE", "2023-01-01 12:00:00 +0000"),
    ("GIT_COMMITTER_NAME", "fake_user"),
    ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
];

pub struct TrackedRepository {
    pub local: TempDir,
    pub remote: TempDir,
}

#[fixture]
pub fn repository_dir() -> TempDir {
    let repository_dir = TempDir::new().expect("Failed to create temp dir");

    run_git_command(repository_dir.path(), &["init", "--quiet"])
        .assert()
        .success();
    run_git_command(
        repository_dir.path(),
        &["symbolic-ref", "HEAD", "refs/heads/main"],
    )
    .assert()
    .success();

    repository_dir
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    run_git_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    git_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

/// A committed repository whose `main` tracks `origin/main` in a bare remote.
#[fixture]
pub fn tracked_repository(init_repository_dir: TempDir) -> TrackedRepository {
    let remote = TempDir::new().expect("Failed to create temp dir");
    run_git_command(remote.path(), &["init", "--quiet", "--bare"])
        .assert()
        .success();

    let remote_path = remote.path().to_string_lossy().to_string();
    run_git_command(
        init_repository_dir.path(),
        &["remote", "add", "origin", &remote_path],
    )
    .assert()
    .success();
    run_git_command(
        init_repository_dir.path(),
        &["push", "--quiet", "-u", "origin", "main"],
    )
    .assert()
    .success();

    TrackedRepository {
        local: init_repository_dir,
        remote,
    }
}

pub fn run_prompt_command(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-prompt").expect("Failed to find git-prompt binary");
    cmd.envs(GIT_ENV);
    cmd.current_dir(dir);
    // never let discovery escape the temp dir into an enclosing repository
    if let Some(parent) = dir.parent() {
        cmd.env("GIT_CEILING_DIRECTORIES", parent);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.envs(GIT_ENV);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    run_git_command(dir, &["commit", "--quiet", "-m", message])
}

/// Write a fresh file and commit it.
pub fn commit_file(dir: &Path, name: &str, message: &str) {
    crate::common::file::write_generated_file(dir, name);

    run_git_command(dir, &["add", name]).assert().success();
    git_commit(dir, message).assert().success();
}

pub fn git_output(dir: &Path, args: &[&str]) -> String {
    let output = run_git_command(dir, args)
        .output()
        .expect("Failed to run git");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn prompt_bytes(dir: &Path) -> Vec<u8> {
    let output = run_prompt_command(dir).assert().success();
    output.get_output().stdout.clone()
}

pub fn prompt_output(dir: &Path) -> String {
    String::from_utf8_lossy(&prompt_bytes(dir)).to_string()
}
