//! [`TestWorkspace`] builder for asset toolkit test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// A temporary project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use asset_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.write_file("public/mindwave.html", "<html></html>");
/// ws.write_png("public/mindwave-logo.png", 64, 64);
/// ws.assert_file_exists("public/mindwave-logo.png");
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
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the workspace.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write a text file, creating parent directories.
    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        self.write_bytes(rel, content.as_bytes())
    }

    /// Write a binary file, creating parent directories.
    pub fn write_bytes(&self, rel: &str, content: &[u8]) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a generated PNG of the given size.
    pub fn write_png(&self, rel: &str, width: u32, height: u32) -> PathBuf {
        self.write_bytes(rel, &fixtures::png_bytes(width, height))
    }

    /// Write [`fixtures::LANDING_PAGE`] at `rel`.
    pub fn write_landing_page(&self, rel: &str) -> PathBuf {
        self.write_file(rel, fixtures::LANDING_PAGE)
    }

    /// Read a text file relative to the root.
    pub fn read(&self, rel: &str) -> String {
        let path = self.path(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `rel` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does **not** exist.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `rel` contains `content`.
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

    /// Assert that the image at `rel` decodes with the given dimensions.
    pub fn assert_image_dimensions(&self, rel: &str, width: u32, height: u32) {
        let full_path = self.path(rel);
        let img = image::open(&full_path)
            .unwrap_or_else(|e| panic!("Could not decode {}: {}", full_path.display(), e));
        assert_eq!(
            (img.width(), img.height()),
            (width, height),
            "Unexpected dimensions for {}",
            full_path.display()
        );
    }
}
