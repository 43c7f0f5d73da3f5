// src/processing/mod.rs
use std::path::{Path, PathBuf};

use crate::extractors::{DecoderKind, FrontmatterDecoder, FrontmatterExtractor, Unsplit};
use crate::utils::error::AppError;

/// A document split into its decoded frontmatter and body.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub source: PathBuf,
    pub format: &'static str,
    pub frontmatter: serde_json::Value, // Schema-free view of the decoded block
    pub body: Vec<u8>,
}

/// Reads a document from disk and extracts its frontmatter.
pub async fn process_file(
    path: &Path,
    decoder: DecoderKind,
) -> Result<ExtractedDocument, AppError> {
    let contents = tokio::fs::read(path).await?;
    tracing::debug!("Read {} ({} bytes)", path.display(), contents.len());

    let extractor = FrontmatterExtractor::with_decoder(decoder);
    let extracted = extractor
        .extract_bytes::<serde_json::Value>(&contents)
        .map_err(Unsplit::into_error)?;

    Ok(ExtractedDocument {
        source: path.to_path_buf(),
        format: decoder.format(),
        frontmatter: extracted.metadata,
        body: extracted.body.to_vec(),
    })
}

/// Success/failure accounting across a batch of documents.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl ProcessSummary {
    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// The batch fails only if nothing succeeded and something failed.
    pub fn finish(self) -> Result<Self, AppError> {
        tracing::info!(
            "Processing finished. Success: {}, Failures: {}",
            self.succeeded,
            self.failed
        );

        if self.succeeded == 0 && self.failed > 0 {
            return Err(AppError::Processing(format!(
                "Failed to extract frontmatter from any of {} documents",
                self.failed
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FrontmatterError;

    fn write_doc(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_process_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(&dir, "post.md", "---\ntitle: Hi\ntags: [a, b]\n---\n# Body text\n");

        let doc = tokio_test::block_on(process_file(&path, DecoderKind::Yaml)).unwrap();

        assert_eq!(doc.source, path);
        assert_eq!(doc.format, "yaml");
        assert_eq!(doc.frontmatter["title"], "Hi");
        assert_eq!(doc.frontmatter["tags"][1], "b");
        assert_eq!(doc.body, b"# Body text\n");
    }

    #[test]
    fn test_process_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(&dir, "post.md", "---\n{\"draft\": true}\n---\nBody");

        let doc = tokio_test::block_on(process_file(&path, DecoderKind::Json)).unwrap();

        assert_eq!(doc.frontmatter["draft"], true);
        assert_eq!(doc.body, b"Body");
    }

    #[test]
    fn test_process_file_without_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(&dir, "plain.md", "# No frontmatter\n");

        let err = tokio_test::block_on(process_file(&path, DecoderKind::Yaml)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Extraction(FrontmatterError::MissingOpeningSeparator)
        ));
    }

    #[test]
    fn test_process_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = tokio_test::block_on(process_file(&dir.path().join("nope.md"), DecoderKind::Yaml))
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_summary_finish() {
        let mut summary = ProcessSummary::default();
        summary.record_failure();
        assert!(summary.finish().is_err());

        summary.record_success();
        assert_eq!(summary.finish().unwrap(), ProcessSummary { succeeded: 1, failed: 1 });

        assert!(ProcessSummary::default().finish().is_ok());
    }
}
