//! Shared testing utilities for booktool CLI tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated book checkout for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    book_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty book directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let book_dir = root.path().join("book");
        fs::create_dir_all(&book_dir).expect("Failed to create test book directory");

        Self { root, book_dir }
    }

    /// Path to the book checkout used for CLI invocations.
    pub fn book_dir(&self) -> &Path {
        &self.book_dir
    }

    /// Build a command for invoking the compiled `booktool` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("booktool").expect("Failed to locate booktool binary");
        cmd.current_dir(self.book_dir());
        cmd
    }

    /// Write a file under the book directory, creating parent directories.
    pub fn write_book_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.book_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write book file");
        path
    }

    /// Write a container marker file with the given content.
    pub fn write_container_marker(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("container");
        fs::write(&path, content).expect("Failed to write container marker");
        path
    }

    /// Path to a container marker that was never created.
    pub fn missing_container_marker(&self) -> PathBuf {
        self.root.path().join("no-such-marker")
    }

    /// Install an executable shell script standing in for jupyter-book.
    ///
    /// The script body can reference `$LOG` for the invocation log path.
    pub fn fake_tool(&self, body: &str) -> (PathBuf, PathBuf) {
        let log = self.root.path().join("tool-invocations.log");
        let script = self.root.path().join("fake-jupyter-book");
        let content = format!("#!/bin/sh\nLOG=\"{}\"\n{}\n", log.display(), body);
        fs::write(&script, content).expect("Failed to write fake tool script");

        let mut perms =
            fs::metadata(&script).expect("Failed to stat fake tool script").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).expect("Failed to mark fake tool executable");

        (script, log)
    }

    /// Invocation log of the fake tool, one line per call; empty if never called.
    pub fn tool_log(&self, log: &Path) -> String {
        fs::read_to_string(log).unwrap_or_default()
    }
}
