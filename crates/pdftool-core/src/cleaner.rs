//! Removal of existing PDF and TXT files from the target directory.

use crate::paths::{self, PDF_SUFFIX, TXT_SUFFIX};
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Result of one cleanup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub deleted: usize,
    pub failed: usize,
}

/// Deletes every entry of `dir` (or the cwd) whose name ends in `.pdf` or `.txt`.
///
/// A missing directory means there is nothing to delete. A path that exists but
/// is not a directory is an error. A file that cannot be removed is logged and
/// counted; the remaining files are still processed.
pub fn delete_all_pdf_and_txt(dir: &Path) -> Result<CleanSummary> {
    let mut summary = CleanSummary::default();
    if !dir.as_os_str().is_empty() && !dir.exists() {
        tracing::debug!("{} does not exist, nothing to delete", dir.display());
        return Ok(summary);
    }

    let targets: Vec<String> = paths::list_files(dir)?
        .into_iter()
        .filter(|name| name.ends_with(PDF_SUFFIX) || name.ends_with(TXT_SUFFIX))
        .collect();

    for name in targets {
        match fs::remove_file(paths::join_target(dir, &name)) {
            Ok(()) => {
                summary.deleted += 1;
                tracing::debug!("Deleted {}", name);
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!("could not delete {}: {}", name, e);
            }
        }
    }

    tracing::info!(
        "Deleted {} files in {}",
        summary.deleted,
        paths::absolute_path(dir)
    );
    if summary.failed > 0 {
        tracing::warn!("Failed to delete {} files", summary.failed);
    }
    Ok(summary)
}
