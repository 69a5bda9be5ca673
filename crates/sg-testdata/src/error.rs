use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestDataError {
    #[error("failed to create {path:?}: {source}")]
    Create { path: PathBuf, source: io::Error },

    #[error("failed to create parent directory {path:?}: {source}")]
    CreateParent { path: PathBuf, source: io::Error },

    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("write failed: {0}")]
    Stream(#[source] io::Error),

    #[error("operating system random generator failed: {0}")]
    Entropy(#[from] rand::Error),
}
