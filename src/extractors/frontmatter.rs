// src/extractors/frontmatter.rs

// --- Imports ---
use crate::extractors::decoder::{FrontmatterDecoder, YamlDecoder};
use crate::extractors::separator::{is_separator_line, next_line};
use crate::utils::error::FrontmatterError;
use serde::de::DeserializeOwned;
use std::ops::Range;

// --- Data Structures ---

/// Byte offsets of a located frontmatter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Block between the separators, excluding both separator lines.
    pub front: Range<usize>,
    /// Offset of the first body byte (end of input if the body is empty).
    pub body_start: usize,
}

/// Successful extraction: decoded metadata plus the body that follows the
/// closing separator, borrowed from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted<B, T> {
    pub metadata: T,
    pub body: B,
}

/// Failed extraction. `body` is always the untouched original input, so a
/// caller ignoring the error still gets the whole document.
#[derive(Debug)]
pub struct Unsplit<B> {
    pub body: B,
    pub error: FrontmatterError,
}

impl<B> Unsplit<B> {
    pub fn into_error(self) -> FrontmatterError {
        self.error
    }

    pub fn into_body(self) -> B {
        self.body
    }
}

impl<B> From<Unsplit<B>> for FrontmatterError {
    fn from(unsplit: Unsplit<B>) -> Self {
        unsplit.error
    }
}

/// Locates the frontmatter block without decoding it.
///
/// The first line must be a separator. The block runs from the line after it
/// up to the next separator line, and the body starts after that line's
/// newline.
pub fn split_frontmatter(contents: &[u8]) -> Result<Split, FrontmatterError> {
    let (opening_end, front_start) = next_line(contents, 0);
    if !is_separator_line(&contents[..opening_end]) {
        tracing::debug!("First line is not a frontmatter separator");
        return Err(FrontmatterError::MissingOpeningSeparator);
    }

    let mut start = front_start;
    while start < contents.len() {
        let (line_end, next_start) = next_line(contents, start);
        if is_separator_line(&contents[start..line_end]) {
            if start == front_start {
                tracing::debug!("Separators are adjacent, frontmatter block is empty");
                return Err(FrontmatterError::EmptyFrontmatter);
            }
            tracing::trace!("Closing separator at byte {}", start);
            return Ok(Split {
                front: front_start..start,
                body_start: next_start,
            });
        }
        start = next_start;
    }

    tracing::debug!("Reached end of input without a closing separator");
    Err(FrontmatterError::MissingClosingSeparator)
}

// --- Main Extractor Structure ---

/// Splits documents into decoded frontmatter and body.
#[derive(Debug, Clone, Default)]
pub struct FrontmatterExtractor<D = YamlDecoder> {
    decoder: D,
}

impl FrontmatterExtractor<YamlDecoder> {
    pub fn new() -> Self {
        Self { decoder: YamlDecoder }
    }
}

impl<D: FrontmatterDecoder> FrontmatterExtractor<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Extracts frontmatter from raw bytes.
    pub fn extract_bytes<'a, T: DeserializeOwned>(
        &self,
        contents: &'a [u8],
    ) -> Result<Extracted<&'a [u8], T>, Unsplit<&'a [u8]>> {
        match self.split_and_decode(contents) {
            Ok((metadata, body_start)) => Ok(Extracted {
                metadata,
                body: &contents[body_start..],
            }),
            Err(error) => Err(Unsplit { body: contents, error }),
        }
    }

    /// Extracts frontmatter from text. Same rules as [`Self::extract_bytes`].
    pub fn extract_str<'a, T: DeserializeOwned>(
        &self,
        contents: &'a str,
    ) -> Result<Extracted<&'a str, T>, Unsplit<&'a str>> {
        match self.split_and_decode(contents.as_bytes()) {
            // body_start always follows a '\n' or is the end, so it is a char boundary
            Ok((metadata, body_start)) => Ok(Extracted {
                metadata,
                body: &contents[body_start..],
            }),
            Err(error) => Err(Unsplit { body: contents, error }),
        }
    }

    fn split_and_decode<T: DeserializeOwned>(
        &self,
        contents: &[u8],
    ) -> Result<(T, usize), FrontmatterError> {
        let split = split_frontmatter(contents)?;
        let front = &contents[split.front];

        tracing::info!(decoder = self.decoder.format(), "{}", String::from_utf8_lossy(front));

        let metadata = self.decoder.decode(front)?;
        Ok((metadata, split.body_start))
    }
}

/// Extracts YAML frontmatter from text.
pub fn extract_metadata<T: DeserializeOwned>(
    contents: &str,
) -> Result<Extracted<&str, T>, Unsplit<&str>> {
    FrontmatterExtractor::new().extract_str(contents)
}

/// Extracts YAML frontmatter from raw bytes.
pub fn extract_metadata_bytes<T: DeserializeOwned>(
    contents: &[u8],
) -> Result<Extracted<&[u8], T>, Unsplit<&[u8]>> {
    FrontmatterExtractor::new().extract_bytes(contents)
}
