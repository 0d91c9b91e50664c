//! PDF to TXT conversion for every PDF in a directory that has no text file yet.
//!
//! Existing text files are never overwritten, so running the pass twice is
//! harmless. A PDF that fails extraction is reported and the pass moves on.

use crate::extract::{ExtractionError, TextExtractor};
use crate::paths;
use crate::storage;
use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("{0:#}")]
    Storage(anyhow::Error),
}

/// What happened to one directory entry.
#[derive(Debug)]
pub enum ConvertOutcome {
    NotPdf,
    AlreadyConverted,
    Converted(PathBuf),
    Failed(ConvertError),
}

/// Counts for one conversion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub succeeded: usize,
    pub skipped: usize,
    /// Names of PDFs whose conversion failed.
    pub failed: Vec<String>,
}

/// Converts every unconverted PDF in `dir` (or the cwd) to a sibling `.txt` file.
///
/// Fails only if `dir` cannot be listed.
pub fn convert_all(extractor: &dyn TextExtractor, dir: &Path) -> Result<ConvertSummary> {
    tracing::info!(
        "Converting all PDF files to TXT files in {}",
        paths::absolute_path(dir)
    );

    let mut summary = ConvertSummary::default();
    for name in paths::list_files(dir)? {
        tracing::debug!("File -> {}", name);
        let path = paths::join_target(dir, &name);
        match convert_one(extractor, &path) {
            ConvertOutcome::NotPdf => {
                summary.skipped += 1;
                tracing::debug!("Skipping because the given file is not a PDF");
            }
            ConvertOutcome::AlreadyConverted => {
                summary.skipped += 1;
                tracing::debug!("Skipping because a TXT file already exists for the given PDF");
            }
            ConvertOutcome::Converted(txt) => {
                summary.succeeded += 1;
                tracing::debug!("Created TXT file -> {}", txt.display());
            }
            ConvertOutcome::Failed(e) => {
                tracing::warn!("Failed to convert {}: {}", name, e);
                summary.failed.push(name);
            }
        }
    }

    if !summary.failed.is_empty() {
        tracing::info!(
            "Failed the conversion of {} PDF file(s) to TXT files",
            summary.failed.len()
        );
    }
    tracing::info!(
        "Finished the conversion of {} PDF file(s) to TXT files",
        summary.succeeded
    );
    Ok(summary)
}

/// Converts `path` if it is a PDF without a companion text file.
pub fn convert_one(extractor: &dyn TextExtractor, path: &Path) -> ConvertOutcome {
    if !paths::is_pdf(&path.to_string_lossy()) {
        return ConvertOutcome::NotPdf;
    }
    if paths::has_companion_text(path) {
        return ConvertOutcome::AlreadyConverted;
    }

    let text = match extractor.extract_text(path) {
        Ok(text) => text,
        Err(e) => return ConvertOutcome::Failed(e.into()),
    };
    let txt = paths::companion_text_path(path);
    match storage::write_atomic(&txt, text.as_bytes()) {
        Ok(_) => ConvertOutcome::Converted(txt),
        Err(e) => ConvertOutcome::Failed(ConvertError::Storage(e)),
    }
}
