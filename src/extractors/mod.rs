// src/extractors/mod.rs
pub mod decoder;
pub mod frontmatter;
pub mod separator;

// Re-export key extraction types for convenience
pub use decoder::{DecoderKind, FrontmatterDecoder, JsonDecoder, YamlDecoder};
pub use frontmatter::{
    extract_metadata,
    extract_metadata_bytes,
    split_frontmatter,
    Extracted,
    FrontmatterExtractor,
    Split,
    Unsplit,
};
pub use separator::is_separator_line;
