use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkerError {
    #[error("Failed to read book {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write chunks to {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read chunk file {}: {source}", path.display())]
    ReadChunks {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid chunk file {}: {source}", path.display())]
    ParseChunks {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChunkerError>;
