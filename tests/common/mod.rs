//! Shared fixtures for integration tests.
//!
//! Repositories are built with the real `git` CLI so the engine is exercised
//! against object databases produced by stock git.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Run a git command in `dir`, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "Test User")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test User")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {:?} failed in {:?}", args, dir);
}

/// Run a git command in `dir` and return its trimmed stdout.
pub fn git_output(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(output.status.success(), "git {:?} failed in {:?}", args, dir);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Fresh temporary directory serving as the repositories root.
pub fn repos_root() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

/// Create a repository named `name` under `root` with one commit adding
/// `a.txt` and `dir/b.txt`.
pub fn create_repo_with_files(root: &Path, name: &str) -> PathBuf {
    let path = root.join(name);
    std::fs::create_dir_all(&path).unwrap();
    git(&path, &["init", "-b", "master"]);
    std::fs::write(path.join("a.txt"), "alpha\n").unwrap();
    std::fs::create_dir_all(path.join("dir")).unwrap();
    std::fs::write(path.join("dir/b.txt"), "beta\n").unwrap();
    git(&path, &["add", "-A"]);
    git(&path, &["commit", "-m", "initial"]);
    path
}

/// Append `count` empty commits to the current branch.
pub fn add_empty_commits(path: &Path, count: usize) {
    for i in 0..count {
        git(
            path,
            &["commit", "--allow-empty", "-m", &format!("commit {}", i)],
        );
    }
}

/// Resolve a revision to its full commit id.
pub fn rev_parse(path: &Path, spec: &str) -> String {
    git_output(path, &["rev-parse", spec])
}

/// First-parent history ids, newest first, as git reports them.
pub fn rev_list_first_parent(path: &Path, spec: &str) -> Vec<String> {
    git_output(path, &["rev-list", "--first-parent", spec])
        .lines()
        .map(|line| line.to_string())
        .collect()
}
