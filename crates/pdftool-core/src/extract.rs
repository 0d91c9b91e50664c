//! PDF text extraction.
//!
//! [`PdfExtractor`] uses `pdf_extract`, which can panic on malformed input
//! rather than returning an error. Calls are wrapped in
//! [`std::panic::catch_unwind`] so a corrupt file becomes an
//! [`ExtractionError`] instead of aborting the batch.

use std::fs;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed PDF {path}: {message}")]
    Malformed { path: PathBuf, message: String },
    #[error("PDF extraction panicked on {path} (malformed document)")]
    Panicked { path: PathBuf },
}

/// Capability to turn a PDF file into plain text.
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// [`TextExtractor`] backed by the `pdf-extract` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        let data = fs::read(path).map_err(|source| ExtractionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&data)
        }));
        match result {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractionError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => Err(ExtractionError::Panicked {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdfExtractor
            .extract_text(&dir.path().join("absent.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Io { .. }));
    }

    #[test]
    fn garbage_bytes_fail_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.pdf");
        fs::write(&path, b"this is not a pdf at all").unwrap();
        let err = PdfExtractor.extract_text(&path).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::Malformed { .. } | ExtractionError::Panicked { .. }
        ));
        assert!(err.to_string().contains("corrupt.pdf"));
    }
}
