//! Shader source discovery and loading

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sg_core::HeaderStyle;

use crate::ShaderError;

/// A shader read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    /// Where the text came from
    pub path: PathBuf,
    /// File name without its final extension
    pub stem: String,
    /// Verbatim file content
    pub text: String,
}

impl ShaderSource {
    /// Build a source from a path and already-loaded text
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self, ShaderError> {
        let path = path.into();
        let stem = path
            .file_stem()
            .and_then(OsStr::to_str)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ShaderError::InvalidFileName(path.clone()))?
            .to_string();

        Ok(Self {
            path,
            stem,
            text: text.into(),
        })
    }

    /// Read a shader file as UTF-8 text
    pub fn read(path: &Path) -> Result<Self, ShaderError> {
        let text = fs::read_to_string(path).map_err(|e| ShaderError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::new(path, text)
    }

    /// Name of the constant the header declares, `<stem><suffix>`
    pub fn constant_name(&self, style: &HeaderStyle) -> String {
        format!("{}{}", self.stem, style.suffix)
    }
}

/// List the shader files directly inside `dir`
///
/// Only regular files whose extension equals `extension` exactly are
/// returned, sorted by path. A missing directory yields no shaders.
pub fn discover_shaders(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ShaderError> {
    let list_error = |e: io::Error| ShaderError::ListSourceDir {
        path: dir.to_path_buf(),
        source: e,
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Shader source directory {:?} does not exist", dir);
            return Ok(Vec::new());
        }
        Err(e) => return Err(list_error(e)),
    };

    let mut shaders = Vec::new();
    for entry in entries {
        let path = entry.map_err(list_error)?.path();
        if path.is_file() && path.extension() == Some(OsStr::new(extension)) {
            shaders.push(path);
        }
    }
    shaders.sort();

    log::debug!("Found {} shader(s) in {:?}", shaders.len(), dir);
    Ok(shaders)
}
