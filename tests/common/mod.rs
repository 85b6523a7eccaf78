//! Scratch sites for integration tests

use std::path::{Path, PathBuf};

use quillpress::{load_config, Config};
use tempfile::TempDir;

/// A site source in a temporary directory
pub struct TestSite {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestSite {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the site root, creating parents
    pub fn write_file(&self, path: &str, content: &str) -> &Self {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        self
    }

    #[allow(dead_code)]
    pub fn read_file(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn config(&self) -> Config {
        load_config(&self.path, None).expect("Failed to load config")
    }
}
