//! Shared testing utilities for create-ps-app CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated home and working directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI runs in; projects are created beneath it.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `create-ps-app` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("create-ps-app").expect("Failed to locate create-ps-app binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }

    /// Path of the saved per-user defaults file.
    pub fn defaults_path(&self) -> PathBuf {
        self.home().join(".create-ps-app.json")
    }

    pub fn write_defaults(&self, json: &str) {
        fs::write(self.defaults_path(), json).expect("Failed to write defaults file");
    }

    pub fn read_defaults(&self) -> Option<String> {
        fs::read_to_string(self.defaults_path()).ok()
    }

    /// Assert that nothing was scaffolded in the work directory.
    pub fn assert_work_dir_empty(&self) {
        let entries = fs::read_dir(&self.work_dir).expect("Failed to list work directory").count();
        assert_eq!(entries, 0, "work directory should be untouched");
    }
}
