//! Common test utilities for devcerts integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Server startup file used by most tests
pub const HUB_MAIN: &str = "import flask\nssl_context = None\napp.run()\n";

/// The line `hub/main.py` is patched to with default settings
pub const SSL_CONTEXT_LINE: &str =
    "    ssl_context = ('certs/localhost.pem', 'certs/localhost-key.pem')\n";

/// A throwaway project directory for integration tests
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create an empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project with `hub/main.py` and a `.gitignore`
    pub fn with_hub() -> Self {
        let project = Self::new();
        project.write_file("hub/main.py", HUB_MAIN);
        project.write_file(".gitignore", "node_modules/\n");
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Path of a tool that does not exist
    pub fn missing_tool(&self) -> PathBuf {
        self.path.join("bin").join("mkcert-not-installed")
    }

    /// Install a fake mkcert that writes placeholder files and logs its arguments to `mkcert.log`.
    /// `install_exit` is the exit code of `mkcert -install`.
    #[cfg(unix)]
    pub fn fake_mkcert(&self, install_exit: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
case "$1" in
  -version) echo "v1.4.4" ;;
  -install) exit {install_exit} ;;
  -key-file) echo key > "$2"; echo cert > "$4" ;;
esac
"#,
            log = self.path.join("mkcert.log").display(),
        );

        let bin_dir = self.path.join("bin");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");
        let path = bin_dir.join("mkcert");
        std::fs::write(&path, script).expect("Failed to write fake mkcert");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake mkcert executable");
        path
    }

    /// Arguments the fake mkcert was called with, one call per line
    pub fn mkcert_calls(&self) -> Vec<String> {
        if !self.file_exists("mkcert.log") {
            return Vec::new();
        }
        self.read_file("mkcert.log")
            .lines()
            .map(ToString::to_string)
            .collect()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// devcerts command running inside `project` with `tool` as mkcert
#[allow(deprecated)]
pub fn devcerts_cmd(project: &TestProject, tool: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("devcerts").expect("devcerts binary");
    cmd.current_dir(&project.path)
        .env("DEVCERTS_MKCERT", tool)
        .env("NO_COLOR", "1");
    cmd
}
