use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubError {
    /// The file matched the notebook extension but is not a valid notebook.
    #[error("Not a valid notebook: {path}: {source}")]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Cannot read directory tree at {path}: {source}")]
    Discovery {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrubError>;
