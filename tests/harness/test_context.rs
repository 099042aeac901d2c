//! Shared testing harness for `autocommit` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_repository::init_repository;

/// Isolated `$HOME` plus a working directory to run the binaries in.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Working directory initialized as a git repository on `main`.
    pub(crate) fn new() -> Self {
        let ctx = Self::without_repository();
        init_repository(ctx.work_dir());
        ctx
    }

    /// Working directory that is not a git repository.
    pub(crate) fn without_repository() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write `config.json` into the working directory.
    pub(crate) fn write_config(&self, json: &str) {
        fs::write(self.work_dir.join("config.json"), json).expect("Failed to write config.json");
    }

    /// Build a command for the `autocommit` worker in the working directory.
    pub(crate) fn cli(&self) -> Command {
        self.command("autocommit")
    }

    pub(crate) fn command(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Names of generated artifacts in the working directory.
    pub(crate) fn artifacts(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to list work directory")
            .filter_map(|entry| entry.ok()?.file_name().into_string().ok())
            .filter(|name| name.starts_with("auto_generated_"))
            .collect();
        names.sort();
        names
    }

    pub(crate) fn read_log(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).unwrap_or_default()
    }
}
