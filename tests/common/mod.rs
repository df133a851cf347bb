//! Common test utilities for evalmerge integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read a file from workspace as JSON
    #[allow(dead_code)]
    pub fn read_json(&self, path: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(path)).expect("Failed to parse JSON")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Copy a fixture dataset's files into `target` (relative to workspace)
    #[allow(dead_code)]
    pub fn copy_fixture_dataset(&self, fixture_name: &str, target: &str) -> PathBuf {
        let target_path = self.path.join(target);
        std::fs::create_dir_all(&target_path).expect("Failed to create dataset directory");

        for entry in std::fs::read_dir(fixture_dir(fixture_name)).expect("Missing fixture") {
            let entry = entry.expect("Failed to read fixture entry");
            std::fs::copy(entry.path(), target_path.join(entry.file_name()))
                .expect("Failed to copy fixture file");
        }

        target_path
    }

    /// Write a minimal export (`<prefix> (<tag>).json` files) into the workspace root
    #[allow(dead_code)]
    pub fn write_export(&self, tag: &str, pairs: &str, evaluations: &str, clusters: &str) {
        self.write_file(&format!("pairData ({tag}).json"), pairs);
        self.write_file(&format!("evaluation ({tag}).json"), evaluations);
        self.write_file(&format!("cluster ({tag}).json"), clusters);
    }
}

/// Path to a fixture dataset directory
pub fn fixture_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join("datasets")
        .join(name)
}

/// Expected output shipped with a fixture dataset
#[allow(dead_code)]
pub fn fixture_expected(name: &str) -> serde_json::Value {
    let content = std::fs::read_to_string(fixture_dir(name).join("expected.json"))
        .expect("Failed to read expected output");
    serde_json::from_str(&content).expect("Failed to parse expected output")
}

/// evalmerge command running inside `workspace`, isolated from the developer's
/// environment
#[allow(deprecated)]
pub fn evalmerge_cmd_for_workspace(workspace: &Path) -> Command {
    let mut cmd = Command::cargo_bin("evalmerge").unwrap();
    cmd.current_dir(workspace);
    cmd.env_remove("EVALMERGE_OUT");
    cmd.env_remove("EVALMERGE_INDIR");
    cmd.env_remove("RUST_LOG");
    cmd
}
