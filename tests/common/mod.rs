//! Common test utilities for taiwan-skill integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A project directory plus an isolated home directory
#[allow(dead_code)]
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Project directory the binary runs in
    pub path: PathBuf,
    /// Home directory handed to the binary
    pub home: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let home = temp.path().join("home");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        Self { temp, path, home }
    }

    /// Command for the real binary, running in the project with the bundled assets
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taiwan-skill").expect("binary is built");
        cmd.current_dir(&self.path);
        cmd.env("HOME", &self.home);
        cmd.env("USERPROFILE", &self.home);
        cmd.env("TAIWAN_SKILL_ASSETS", bundled_assets());
        cmd.env_remove("TAIWAN_SKILL");
        cmd.env_remove("TAIWAN_SKILL_LOG");
        cmd.env_remove("TAIWAN_SKILL_REGISTRY");
        cmd
    }

    /// Create an assistant folder so it is detected
    #[allow(dead_code)]
    pub fn create_agent_dir(&self, folder: &str) -> PathBuf {
        let dir = self.path.join(folder);
        std::fs::create_dir_all(&dir).expect("Failed to create agent directory");
        dir
    }

    /// Write a file in the project
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Copy the bundled assets into the workspace so tests can break them
    #[allow(dead_code)]
    pub fn copy_assets(&self) -> PathBuf {
        let target = self.temp.path().join("assets");
        copy_dir_recursive(&bundled_assets(), &target).expect("Failed to copy assets");
        target
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The assets directory shipped with the crate
pub fn bundled_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// Relative paths of all files below `root`, sorted
#[allow(dead_code)]
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            e.path()
                .strip_prefix(root)
                .ok()
                .map(|p| p.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    files.sort();
    files
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.is_dir());
        assert!(workspace.home.is_dir());
    }

    #[test]
    fn test_workspace_copy_assets() {
        let workspace = TestWorkspace::new();
        let assets = workspace.copy_assets();
        assert_eq!(
            list_files(&assets.join("taiwan-invoice")),
            list_files(&bundled_assets().join("taiwan-invoice"))
        );
    }
}
