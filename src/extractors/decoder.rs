// src/extractors/decoder.rs

// --- Imports ---
use crate::utils::error::DecodeError;
use serde::de::DeserializeOwned;

/// Structured-data decoder applied to an isolated frontmatter block.
pub trait FrontmatterDecoder {
    /// Format identifier, used in logs and metadata output.
    fn format(&self) -> &'static str;

    /// Decodes `block` into the caller's target type.
    fn decode<T: DeserializeOwned>(&self, block: &[u8]) -> Result<T, DecodeError>;
}

/// YAML frontmatter, the common case for markdown documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDecoder;

impl FrontmatterDecoder for YamlDecoder {
    fn format(&self) -> &'static str {
        "yaml"
    }

    fn decode<T: DeserializeOwned>(&self, block: &[u8]) -> Result<T, DecodeError> {
        Ok(serde_yaml::from_slice(block)?)
    }
}

/// JSON object frontmatter between the same `---` separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl FrontmatterDecoder for JsonDecoder {
    fn format(&self) -> &'static str {
        "json"
    }

    fn decode<T: DeserializeOwned>(&self, block: &[u8]) -> Result<T, DecodeError> {
        Ok(serde_json::from_slice(block)?)
    }
}

/// Decoder chosen at runtime (CLI `--format`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DecoderKind {
    #[default]
    Yaml,
    Json,
}

impl FrontmatterDecoder for DecoderKind {
    fn format(&self) -> &'static str {
        match self {
            DecoderKind::Yaml => YamlDecoder.format(),
            DecoderKind::Json => JsonDecoder.format(),
        }
    }

    fn decode<T: DeserializeOwned>(&self, block: &[u8]) -> Result<T, DecodeError> {
        match self {
            DecoderKind::Yaml => YamlDecoder.decode(block),
            DecoderKind::Json => JsonDecoder.decode(block),
        }
    }
}
