//! SG Tools Configuration
//!
//! Handles loading settings for the shader and test data tools from
//! `./sg-tools.toml` or `~/.config/sg-tools/config.toml`. Every field has a
//! default, so partial files and no file at all both work.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use sg_core::HeaderStyle;
use sg_shaders::ShaderOptions;
use sg_testdata::{DEFAULT_CHUNK_SIZE, Fixture, MAX_CHUNK_SIZE, TestDataOptions, default_fixtures};

/// Project-local configuration file name
const PROJECT_CONFIG_FILE_NAME: &str = "sg-tools.toml";
/// User configuration directory name under the platform config dir
const USER_CONFIG_DIR_NAME: &str = "sg-tools";
/// User configuration file name
const USER_CONFIG_FILE_NAME: &str = "config.toml";

/// Shader header generator section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    /// Extension of shader sources, without the dot
    pub extension: String,
    /// Extension of generated headers, without the dot
    pub header_extension: String,
    /// Exit non-zero when any shader is skipped
    pub strict: bool,
    /// Header layout
    pub style: HeaderStyle,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        let options = ShaderOptions::default();
        Self {
            extension: options.extension,
            header_extension: options.header_extension,
            strict: false,
            style: options.style,
        }
    }
}

impl ShaderConfig {
    pub fn options(&self) -> ShaderOptions {
        ShaderOptions {
            extension: self.extension.clone(),
            header_extension: self.header_extension.clone(),
            style: self.style.clone(),
        }
    }
}

/// Random test data section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestDataConfig {
    /// Bytes requested from the OS per write
    pub chunk_size: usize,
    /// Create missing parent directories of output files
    pub create_parents: bool,
    /// Exit non-zero when a file cannot be written
    pub strict: bool,
    /// Files generated by `sg-tools fixtures`
    pub fixtures: Vec<Fixture>,
}

impl Default for TestDataConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            create_parents: true,
            strict: false,
            fixtures: default_fixtures(),
        }
    }
}

impl TestDataConfig {
    pub fn options(&self) -> TestDataOptions {
        TestDataOptions {
            chunk_size: self.chunk_size,
            create_parents: self.create_parents,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ToolsConfig {
    pub shaders: ShaderConfig,
    pub test_data: TestDataConfig,
}

impl ToolsConfig {
    /// Load configuration
    ///
    /// An explicit path must exist and parse. Without one, the first existing
    /// candidate from `candidate_paths()` is used, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                let config = Self::load_from(path)?;
                log::info!("Loaded configuration from {:?}", path);
                Ok(config)
            }
            None => Self::load_first_existing(&Self::candidate_paths()),
        }
    }

    /// Load the first candidate that exists, or defaults if none do
    pub fn load_first_existing(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        for path in candidates {
            if path.is_file() {
                let config = Self::load_from(path)?;
                log::info!("Loaded configuration from {:?}", path);
                return Ok(config);
            }
        }

        log::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;

        let config: ToolsConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Files searched when no explicit path is given, in priority order
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE_NAME)];
        if let Some(user) = Self::user_config_path() {
            paths.push(user);
        }
        paths
    }

    /// Get the user configuration file path (~/.config/sg-tools/config.toml)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(USER_CONFIG_DIR_NAME).join(USER_CONFIG_FILE_NAME))
    }

    /// Reject settings no run could succeed with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.shaders.style.delimiter_is_valid() {
            return Err(ConfigError::Invalid(format!(
                "shaders.style.delimiter {:?} is not a valid raw string delimiter",
                self.shaders.style.delimiter
            )));
        }
        if self.shaders.extension.is_empty() || self.shaders.extension.starts_with('.') {
            return Err(ConfigError::Invalid(format!(
                "shaders.extension {:?} must be non-empty and given without the dot",
                self.shaders.extension
            )));
        }
        if self.test_data.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::Invalid(format!(
                "test_data.chunk_size {} exceeds the limit of {} bytes",
                self.test_data.chunk_size, MAX_CHUNK_SIZE
            )));
        }
        Ok(())
    }

    /// Write the commented default configuration to `path`
    ///
    /// Missing parent directories are created and an existing file is replaced.
    pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::CreateDirError(parent.to_path_buf(), e))?;
        }

        fs::write(path, Self::generate_default_config())
            .map_err(|e| ConfigError::WriteError(path.to_path_buf(), e))
    }

    /// Generate a default config file with comments
    pub fn generate_default_config() -> String {
        r#"# SG Tools Configuration
# Place this file at ./sg-tools.toml or ~/.config/sg-tools/config.toml

[shaders]
# Extension of shader sources (without the dot)
extension = "glsl"
# Extension of generated headers (without the dot)
header_extension = "h"
# Exit with status 1 when any shader is skipped
strict = false

[shaders.style]
# Emit `#pragma once` at the top of each header
pragma_once = false
# Declare the constant `static`
static_linkage = false
# Raw string delimiter: R"<delimiter>( ... )<delimiter>"
delimiter = ""
# Constant name is <file stem><suffix>
suffix = "_Source"

[test_data]
# Bytes requested from the OS per write
chunk_size = 65536
# Create missing parent directories of output files
create_parents = true
# Exit with status 1 when a file cannot be written
strict = false

# Fixture set written by `sg-tools fixtures`
# Sizes accept B, KB, MB, GB (powers of 1000) and KiB, MiB, GiB (powers of 1024)

[[test_data.fixtures]]
path = "TestData/1MB.bin"
size = "1MiB"

[[test_data.fixtures]]
path = "TestData/10MB.bin"
size = "10MiB"

[[test_data.fixtures]]
path = "TestData/100MB.bin"
size = "100MiB"

[[test_data.fixtures]]
path = "TestData/1000MB.bin"
size = "1000MiB"
"#
        .to_string()
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read config file
    ReadError(PathBuf, std::io::Error),
    /// Failed to parse config file
    ParseError(PathBuf, toml::de::Error),
    /// Failed to write config file
    WriteError(PathBuf, std::io::Error),
    /// Failed to create directory
    CreateDirError(PathBuf, std::io::Error),
    /// Settings parsed but are unusable
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => write!(f, "Failed to read {:?}: {}", path, e),
            ConfigError::ParseError(path, e) => write!(f, "Failed to parse {:?}: {}", path, e),
            ConfigError::WriteError(path, e) => write!(f, "Failed to write {:?}: {}", path, e),
            ConfigError::CreateDirError(path, e) => write!(f, "Failed to create {:?}: {}", path, e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
