//! Scrape one page for PDF links and download each of them.
//!
//! Links are processed one at a time. Each link yields a [`LinkOutcome`]; a
//! failing link is logged and counted and never stops the remaining links.
//! Only fetching the page itself (or creating the destination directory) is fatal.

use crate::html;
use crate::http::{self, FetchError, HttpFetch};
use crate::paths;
use crate::storage::PartFile;
use crate::url_model::{self, UrlModelError};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a single link was not downloaded.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error(transparent)]
    Url(#[from] UrlModelError),
    #[error("{0:?} does not yield a usable file name")]
    UnsafeFileName(String),
    #[error("HTTP {0}")]
    Http(u32),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("{0:#}")]
    Storage(anyhow::Error),
}

/// What happened to one PDF link.
#[derive(Debug)]
pub enum LinkOutcome {
    Downloaded { path: PathBuf, bytes: u64 },
    AlreadyPresent(PathBuf),
    Failed(LinkError),
}

/// Counts for one download pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    /// PDF links found on the page.
    pub links: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Downloads every PDF linked from `page_url` into `dest_dir` (or the cwd).
pub fn download_all(
    fetcher: &dyn HttpFetch,
    page_url: &str,
    dest_dir: &Path,
) -> Result<DownloadSummary> {
    tracing::info!("Downloading all PDFs from {}", page_url);

    let page = fetcher
        .fetch(page_url)
        .with_context(|| format!("failed to fetch page {page_url}"))?;
    if !page.is_success() {
        tracing::warn!("page {} returned HTTP {}", page_url, page.status);
    }

    let scan = html::scan_anchors(&String::from_utf8_lossy(&page.body));

    let base = match url_model::base_url(page_url) {
        Ok(base) => Some(base),
        Err(e) => {
            tracing::warn!("relative links on {} will be skipped: {}", page_url, e);
            None
        }
    };

    if scan.anchors > 0 && !dest_dir.as_os_str().is_empty() {
        fs::create_dir_all(dest_dir)
            .with_context(|| format!("failed to create directory {}", dest_dir.display()))?;
    }

    let pdf_links: Vec<&str> = scan
        .hrefs
        .iter()
        .map(String::as_str)
        .filter(|href| url_model::is_pdf_href(href))
        .collect();

    let mut summary = DownloadSummary {
        links: pdf_links.len(),
        ..DownloadSummary::default()
    };
    for (index, href) in pdf_links.into_iter().enumerate() {
        tracing::debug!("Downloading file {}: {}", index, href);
        match download_link(fetcher, base.as_deref(), href, dest_dir) {
            LinkOutcome::Downloaded { path, bytes } => {
                summary.succeeded += 1;
                tracing::debug!("File {} downloaded -> {} ({} bytes)", index, path.display(), bytes);
            }
            LinkOutcome::AlreadyPresent(path) => {
                summary.skipped += 1;
                tracing::debug!("Skipping {}: {} already exists", href, path.display());
            }
            LinkOutcome::Failed(e) => {
                summary.failed += 1;
                tracing::warn!("Failed to download {}: {}", href, e);
            }
        }
    }

    if summary.failed > 0 {
        tracing::info!("Failed the download of {} PDF file(s)", summary.failed);
    }
    tracing::info!(
        "Finished the download of {} PDF file(s) in {} ({} already present)",
        summary.succeeded,
        paths::absolute_path(dest_dir),
        summary.skipped
    );
    Ok(summary)
}

/// Resolves, checks and downloads a single href.
pub fn download_link(
    fetcher: &dyn HttpFetch,
    base: Option<&str>,
    href: &str,
    dest_dir: &Path,
) -> LinkOutcome {
    match try_download_link(fetcher, base, href, dest_dir) {
        Ok(outcome) => outcome,
        Err(e) => LinkOutcome::Failed(e),
    }
}

fn try_download_link(
    fetcher: &dyn HttpFetch,
    base: Option<&str>,
    href: &str,
    dest_dir: &Path,
) -> Result<LinkOutcome, LinkError> {
    let url = url_model::resolve_href(base, href)?;
    tracing::debug!("URL: {}", url);

    let name = url_model::file_name_from_path_or_url(&url);
    if !is_usable_file_name(&name) {
        return Err(LinkError::UnsafeFileName(name));
    }
    let dest = paths::join_target(dest_dir, &name);
    if dest.exists() {
        return Ok(LinkOutcome::AlreadyPresent(dest));
    }

    let mut part = PartFile::create(&dest).map_err(LinkError::Storage)?;
    let status = match fetcher.fetch_into(&url, &mut part) {
        Ok(status) => status,
        Err(e) => {
            discard(part);
            return Err(e.into());
        }
    };
    if !http::is_success(status) {
        discard(part);
        return Err(LinkError::Http(status));
    }

    let bytes = part.finalize().map_err(LinkError::Storage)?;
    Ok(LinkOutcome::Downloaded { path: dest, bytes })
}

fn discard(part: PartFile) {
    if let Err(e) = part.discard() {
        tracing::debug!("{:#}", e);
    }
}

fn is_usable_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}
