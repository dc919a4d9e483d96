//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary directory tree
//! - Command builder helpers with a clean `LSI_*` environment
//! - Output helpers for common checks

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads.
const LSI_ENV_VARS: [&str; 5] = [
    "LSI_LOG_MODE",
    "LSI_OUTPUT_FORMAT",
    "LSI_TIMEOUT",
    "LSI_INDENT_WIDTH",
    "LSI_MAX_LINK_DEPTH",
];

/// Test environment with an isolated directory tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The root is canonicalized so that a symlinked system temp directory
    /// doesn't add records to every walk.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        Self { temp_dir, root }
    }

    /// Get a command builder for the lsi binary with `LSI_*` variables
    /// cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("lsi").expect("Failed to find lsi binary");
        for var in LSI_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Absolute path of `relative` inside the environment.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Create a subdirectory (and its parents).
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with the given contents.
    pub fn create_file(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a symlink at `relative` pointing at `target` verbatim.
    #[cfg(unix)]
    pub fn create_symlink(&self, relative: &str, target: impl AsRef<Path>) -> PathBuf {
        let path = self.path(relative);
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Number of elements in the walk of `path` without following links.
    pub fn element_count(&self, path: &Path) -> usize {
        lsi::split(path).len()
    }
}

/// Run a command, assert it succeeded, and return stdout.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run lsi");
    assert!(
        output.status.success(),
        "lsi failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
}
