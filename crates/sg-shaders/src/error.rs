use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("failed to read shader {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write header {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to create output directory {path:?}: {source}")]
    CreateOutputDir { path: PathBuf, source: io::Error },

    #[error("failed to list source directory {path:?}: {source}")]
    ListSourceDir { path: PathBuf, source: io::Error },

    #[error("shader file name has no usable stem: {0:?}")]
    InvalidFileName(PathBuf),

    #[error("shader {path:?} contains the raw string terminator {terminator}")]
    DelimiterCollision { path: PathBuf, terminator: String },

    #[error("invalid raw string delimiter {0:?}")]
    InvalidDelimiter(String),
}

impl ShaderError {
    /// Errors that end the whole directory pass rather than a single file
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShaderError::CreateOutputDir { .. }
                | ShaderError::ListSourceDir { .. }
                | ShaderError::InvalidDelimiter(_)
        )
    }
}
