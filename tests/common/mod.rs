//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary directory and provides utilities for setting up
/// scripts and fake compiler binaries.
pub struct TestWorkspace {
    /// Temporary directory backing the workspace
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Create a new workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the workspace and return its path
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Create an executable shell script standing in for a compiler binary
    #[cfg(unix)]
    pub fn create_fake_compiler(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.create_file(name, &format!("#!/bin/sh\n{body}\n"));
        let mut perms = std::fs::metadata(&path).expect("stat script").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("chmod script");
        path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
