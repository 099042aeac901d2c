//! Thin wrappers over the `git` CLI for asserting repository state.

use std::path::Path;
use std::process::Command;

/// Run `git` in `dir`, asserting success, and return trimmed stdout.
pub(crate) fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialize a repository on `main` with a test identity.
pub(crate) fn init_repository(dir: &Path) {
    git(dir, &["init", "--initial-branch=main"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);
}

/// Initialize a bare repository usable as a push target.
pub(crate) fn init_bare(dir: &Path) {
    git(dir, &["init", "--bare", "--initial-branch=main"]);
}

pub(crate) fn head_subject(dir: &Path) -> String {
    git(dir, &["log", "-1", "--format=%s"])
}

pub(crate) fn commit_count(dir: &Path) -> usize {
    git(dir, &["rev-list", "--count", "HEAD"]).parse().expect("rev-list count")
}
