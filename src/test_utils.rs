//! Test utilities for building throwaway directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a tree `width` directories wide and `depth` levels deep, with
    /// `files_per_dir` files in every directory, alternating `.txt` and `.rs`.
    pub fn populate(&self, width: usize, depth: usize, files_per_dir: usize) {
        fn fill(root: &Path, width: usize, depth: usize, files_per_dir: usize) {
            for f in 0..files_per_dir {
                let ext = if f % 2 == 0 { "txt" } else { "rs" };
                fs::write(root.join(format!("file{}.{}", f, ext)), "x")
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for w in 0..width {
                let sub = root.join(format!("dir{}", w));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, width, depth - 1, files_per_dir);
            }
        }
        fill(self.dir.path(), width, depth, files_per_dir);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
