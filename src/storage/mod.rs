// src/storage/mod.rs
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;
use crate::processing::ExtractedDocument;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
    written: Mutex<HashSet<PathBuf>>, // Targets written by this manager
}

/// Metadata describing an extracted document, as written to `<stem>.meta.json`.
pub fn document_metadata(doc: &ExtractedDocument) -> serde_json::Value {
    serde_json::json!({
        "source": doc.source.display().to_string(),
        "format": doc.format,
        "frontmatter": doc.frontmatter,
        "body_length": doc.body.len(),
        "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
    })
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_dir: base_path,
            written: Mutex::new(HashSet::new()),
        })
    }

    /// Saves the document body, byte for byte, to `<dirs>/<stem>.body.md`
    pub fn save_body(&self, doc: &ExtractedDocument) -> Result<PathBuf, StorageError> {
        let file_path = self.claim_target(doc, "body.md")?;

        fs::write(&file_path, &doc.body)?;

        tracing::info!("Saved body to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves the frontmatter and extraction details in JSON format
    pub fn save_metadata(&self, doc: &ExtractedDocument) -> Result<PathBuf, StorageError> {
        let file_path = self.claim_target(doc, "meta.json")?;

        let metadata_str = serde_json::to_string_pretty(&document_metadata(doc))
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }

    /// Resolves the output path for `doc`, mirroring the source's directories
    /// under the base directory. Fails if this manager already wrote that path.
    fn claim_target(
        &self,
        doc: &ExtractedDocument,
        suffix: &str,
    ) -> Result<PathBuf, StorageError> {
        let mut target_dir = self.base_dir.clone();
        if let Some(parent) = doc.source.parent() {
            // Root, prefix and `..` components are dropped
            for component in parent.components() {
                if let Component::Normal(part) = component {
                    target_dir.push(part);
                }
            }
        }
        let file_path = target_dir.join(format!("{}.{}", file_stem(doc), suffix));

        let mut written = self.written.lock().unwrap_or_else(|e| e.into_inner());
        if !written.insert(file_path.clone()) {
            tracing::warn!(
                "Refusing to overwrite {} from {}",
                file_path.display(),
                doc.source.display()
            );
            return Err(StorageError::FileExists(file_path.display().to_string()));
        }

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir)?;
        }
        Ok(file_path)
    }
}

fn file_stem(doc: &ExtractedDocument) -> String {
    doc.source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}
