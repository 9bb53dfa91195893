//! Error types for storage operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid layout name: {0:?}")]
    InvalidLayoutName(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Background save failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
