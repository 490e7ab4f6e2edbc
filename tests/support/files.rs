use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Temporary directory holding input files for one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Write `contents` to `name` inside the workspace.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write temp file");
        path
    }
}
