//! Common test utilities and harness
//!
//! Provides reusable utilities for functional testing including:
//! - Test environment setup (temp directories, shader trees, configs)
//! - Running the built binaries
//! - Assertion utilities for generated headers

#![allow(dead_code)]

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Test environment with isolated source, output and config locations
pub struct TestEnvironment {
    /// Temporary directory holding everything
    pub temp_dir: TempDir,
    /// Directory shader sources are written to
    pub shader_dir: PathBuf,
    /// Directory headers are generated into (not created up front)
    pub include_dir: PathBuf,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let shader_dir = temp_dir.path().join("Shaders");
        let include_dir = shader_dir.join("Include");

        std::fs::create_dir_all(&shader_dir).expect("Failed to create shader directory");

        Self {
            temp_dir,
            shader_dir,
            include_dir,
        }
    }

    /// Root of the environment
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a shader source file and return its path
    pub fn write_shader(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.shader_dir.join(file_name);
        std::fs::write(&path, content).expect("Failed to write test shader");
        path
    }

    /// Write raw bytes as a shader file (e.g. invalid UTF-8)
    pub fn write_shader_bytes(&self, file_name: &str, content: &[u8]) -> PathBuf {
        let path = self.shader_dir.join(file_name);
        std::fs::write(&path, content).expect("Failed to write test shader");
        path
    }

    /// Write a config file and return its path
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root().join("sg-tools.toml");
        std::fs::write(&path, content).expect("Failed to write test config");
        path
    }

    /// Read a generated header
    pub fn read_header(&self, file_name: &str) -> String {
        std::fs::read_to_string(self.include_dir.join(file_name))
            .unwrap_or_else(|e| panic!("Failed to read header {}: {}", file_name, e))
    }

    /// Sorted file names in the include directory
    pub fn header_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.include_dir)
            .expect("Include directory should exist")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

/// Expected header text for the default style
pub fn expected_header(stem: &str, source: &str) -> String {
    format!("const char* {}_Source = R\"(\n{}\n)\";\n", stem, source)
}

/// Run one of the package binaries from `cwd` with `args`
///
/// `RUST_LOG` is pinned so status lines always reach stderr.
pub fn run_binary<I>(binary: &str, cwd: &Path, args: I) -> Output
where
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    Command::new(binary)
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "info")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run {}: {}", binary, e))
}

/// Assert a process exited with `code`, showing its output otherwise
pub fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Stderr of a process as text
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
