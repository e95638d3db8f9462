//! Shared filesystem fixtures for unit tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_site_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes `content` at `relative_path` under `dir`, creating parent directories.
pub fn create_test_file(dir: &TempDir, relative_path: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}
