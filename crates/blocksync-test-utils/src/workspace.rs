//! [`TestWorkspace`] builder for on-disk sync scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::pages;

/// A temporary directory with helpers for writing fixture documents and
/// asserting on their content afterwards.
///
/// # Example
///
/// ```rust,no_run
/// use blocksync_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::with_dashboard_pages();
/// ws.assert_file_contains(
///     blocksync_test_utils::pages::AGENT_PAGE_PATH,
///     "Create Vehicle Modal",
/// );
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new()
                .unwrap_or_else(|e| panic!("TestWorkspace::new: failed to create temp dir: {e}")),
        }
    }

    /// Create a workspace holding the admin and agent pages at the paths used
    /// by the built-in job.
    pub fn with_dashboard_pages() -> Self {
        let ws = Self::new();
        ws.write(pages::ADMIN_PAGE_PATH, pages::ADMIN_PAGE);
        ws.write(pages::AGENT_PAGE_PATH, pages::AGENT_PAGE);
        ws
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the workspace.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel`, creating parent directories.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write(&self, rel: &str, content: &str) {
        let full_path = self.path(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("write: failed to create {}: {e}", parent.display()));
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("write: failed to write {}: {e}", full_path.display()));
    }

    /// Read `rel` as UTF-8 text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, rel: &str) -> String {
        let full_path = self.path(rel);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that the file at `rel` is byte-identical to `expected`.
    ///
    /// # Panics
    /// Panics with both contents if they differ.
    pub fn assert_file_eq(&self, rel: &str, expected: &str) {
        let actual = self.read(rel);
        assert!(
            actual == expected,
            "File {} differs from expected content.\nExpected:\n{}\nActual:\n{}",
            rel,
            expected,
            actual
        );
    }

    /// Assert that the file at `rel` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = self.read(rel);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            rel,
            content,
            file_content
        );
    }
}
