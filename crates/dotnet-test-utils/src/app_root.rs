//! [`AppRoot`] builder for detection test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary application root with helper methods for staging runtime
/// configs and fake published binaries.
///
/// # Example
///
/// ```rust,no_run
/// use dotnet_test_utils::AppRoot;
///
/// let app = AppRoot::new();
/// app.write_runtime_config("webapp", r#"{"runtimeOptions": {}}"#);
/// app.write_executable("webapp");
/// ```
pub struct AppRoot {
    temp_dir: TempDir,
}

impl Default for AppRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl AppRoot {
    /// Create an empty temporary application root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("AppRoot::new: failed to create temp dir"),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `<app_name>.runtimeconfig.json` with the given contents and
    /// return its path.
    pub fn write_runtime_config(&self, app_name: &str, contents: &str) -> PathBuf {
        self.write_file(&format!("{app_name}.runtimeconfig.json"), contents)
    }

    /// Write a fake published executable named exactly `app_name`.
    pub fn write_executable(&self, app_name: &str) -> PathBuf {
        self.write_file(app_name, "fake exe")
    }

    /// Write an arbitrary file directly under the root.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("AppRoot::write_file: failed to write fixture");
        path
    }
}
