//! Common test utilities for integration tests.
//!
//! Helpers for building small directory trees with symlinks in them and for
//! running walks over them.

use std::fs;
use std::path::{Path, PathBuf};

use lsi::{CancelToken, Collector, Record, Result, Walker};
use tempfile::TempDir;

/// A scratch directory, addressed by its canonical path so that a symlinked
/// system temp dir doesn't show up in walks.
pub struct Tree {
    _temp: TempDir,
    root: PathBuf,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        Self { _temp: temp, root }
    }

    /// The canonical root of the tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `relative` inside the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Create a directory and its parents.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Create a file with `contents`, creating parents as needed.
    pub fn file(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Create a symlink at `relative` pointing at `target` (verbatim).
    #[allow(dead_code)]
    pub fn symlink(&self, relative: &str, target: impl AsRef<Path>) -> PathBuf {
        let path = self.path(relative);
        std::os::unix::fs::symlink(target, &path).unwrap();
        path
    }
}

/// Walk `path` with the native platform and collect records the way the
/// command-line tool does.
#[allow(dead_code)]
pub fn collect(path: &Path, follow: bool) -> (Vec<Record>, Result<()>) {
    let mut collector = Collector::new(follow);
    let result = Walker::new().walk(path, &CancelToken::new(), &mut collector);
    (collector.into_records(), result)
}

/// The last `n` records as `(name, depth)` pairs, in walk order.
#[allow(dead_code)]
pub fn tail(records: &[Record], n: usize) -> Vec<(String, usize)> {
    records[records.len().saturating_sub(n)..]
        .iter()
        .map(|r| (r.name().to_string(), r.depth()))
        .collect()
}
