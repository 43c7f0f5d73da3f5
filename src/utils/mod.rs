// src/utils/mod.rs
pub mod error;
pub mod logging;

// Re-export error types for convenience
pub use error::{AppError, DecodeError, FrontmatterError, StorageError};
