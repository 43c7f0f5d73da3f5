// src/utils/error.rs
use thiserror::Error;

// Errors raised by the structured-data decoders, surfaced unchanged
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// Coarse taxonomy for frontmatter splitting. Partial matches (e.g. two hyphens)
// are not distinguished from a missing separator.
#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("frontmatter must start with a separator line")]
    MissingOpeningSeparator,

    #[error("could not find a closing frontmatter separator line")]
    MissingClosingSeparator,

    #[error("frontmatter block between separators is empty")]
    EmptyFrontmatter,

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("File already written in this run: {0}")]
    FileExists(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] FrontmatterError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
