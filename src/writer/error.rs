use std::path::PathBuf;

use thiserror::Error;

/// Failures while putting generated documents on disk.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize JSON")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WriteError>;
