// src/lib.rs
//! Splits a document into its frontmatter block and body.
//!
//! A document opens with a separator line (three or more `-`, optionally padded
//! with spaces or Unicode whitespace), carries a structured-data block, closes
//! with another separator line and continues with free-form content. The block
//! is decoded into a caller-chosen type; the body is returned untouched.
pub mod extractors;
pub mod processing;
pub mod storage;
pub mod utils;

pub use extractors::{
    extract_metadata,
    extract_metadata_bytes,
    is_separator_line,
    Extracted,
    FrontmatterExtractor,
    Unsplit,
};
pub use utils::error::{DecodeError, FrontmatterError};
