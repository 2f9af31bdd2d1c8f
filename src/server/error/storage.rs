use std::path::PathBuf;

use thiserror::Error;

/// Failures writing or deleting the fixed files under the parsing directory.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not store uploaded file at {path}: {source}")]
    Store {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not delete temporary file {path}: {source}")]
    Cleanup {
        path: PathBuf,
        source: std::io::Error,
    },
}
