//! [`TestWorkspace`] builder for on-disk test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the workspace configuration file.
pub const WORKSPACE_CONFIG: &str = ".markdown-toc.toml";

/// A temporary directory holding documents and configuration files.
///
/// The global configuration directory lives inside the workspace too, so
/// tests never read the real user configuration.
///
/// # Example
///
/// ```rust,no_run
/// use toc_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// let readme = ws.write("README.md", "# Title\n");
/// ws.write_workspace_config("[toc]\ndepth_from = 2\n");
/// ws.assert_file_contains("README.md", "# Title");
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

    /// Root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative`.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Directory used in place of the platform config directory.
    pub fn global_config_dir(&self) -> PathBuf {
        self.path(".global-config")
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `relative` as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Write the workspace config at the root.
    pub fn write_workspace_config(&self, content: &str) -> PathBuf {
        self.write(WORKSPACE_CONFIG, content)
    }

    /// Write `config.toml` into [`TestWorkspace::global_config_dir`].
    pub fn write_global_config(&self, content: &str) -> PathBuf {
        let dir = self.global_config_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    /// Assert that the file at `relative` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            file_content.contains(content),
            "Expected {} to contain {:?}, got:\n{}",
            relative,
            content,
            file_content
        );
    }

    /// Assert that no stray temporary files were left next to the documents.
    ///
    /// # Panics
    /// Panics if a `*.tmp` file exists at the workspace root.
    pub fn assert_no_temp_files(&self) {
        let leftovers: Vec<_> = fs::read_dir(self.root())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "Leftover temp files: {leftovers:?}");
    }
}
