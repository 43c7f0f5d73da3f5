// src/main.rs
use std::path::PathBuf;

use clap::Parser;
use frontmatter_extractor::extractors::DecoderKind;
use frontmatter_extractor::processing::{self, ProcessSummary};
use frontmatter_extractor::storage::{self as storage_utils, StorageManager};
use frontmatter_extractor::utils::{self, AppError};

/// Command Line Interface for splitting frontmatter from documents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Documents to process
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output directory for extracted bodies and metadata
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Structured-data format of the frontmatter block
    #[arg(long, value_enum, default_value_t = DecoderKind::Yaml)]
    format: DecoderKind,

    /// Print results as JSON lines on stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Debug-level logging unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(utils::logging::default_directive(args.verbose));
    tracing::info!("Starting processing for args: {:?}", args);

    // 2. Initialize storage unless results go to stdout
    let storage = if args.stdout {
        None
    } else if args.output_dir.is_file() {
        return Err(AppError::Config(format!(
            "Output path {} is a file, expected a directory",
            args.output_dir.display()
        )));
    } else {
        Some(StorageManager::new(&args.output_dir)?)
    };

    // 3. Process each document
    let mut summary = ProcessSummary::default();

    for path in &args.files {
        tracing::info!("Processing {}", path.display());

        let doc = match processing::process_file(path, args.format).await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::error!("Failed to extract frontmatter from {}: {}", path.display(), e);
                summary.record_failure();
                continue;
            }
        };

        match &storage {
            Some(storage) => {
                let saved = storage
                    .save_body(&doc)
                    .and_then(|body| storage.save_metadata(&doc).map(|meta| (body, meta)));
                match saved {
                    Ok((body, meta)) => {
                        tracing::debug!("Written: {} and {}", body.display(), meta.display());
                        summary.record_success();
                    }
                    Err(e) => {
                        tracing::error!("Failed to save output for {}: {}", path.display(), e);
                        summary.record_failure();
                    }
                }
            }
            None => {
                let mut record = storage_utils::document_metadata(&doc);
                record["body"] = String::from_utf8_lossy(&doc.body).into_owned().into();
                println!("{}", record);
                summary.record_success();
            }
        }
    }

    // 4. Fail the run only when every document failed
    summary.finish()?;
    Ok(())
}
