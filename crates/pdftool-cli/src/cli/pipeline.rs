//! The fixed run order: optional delete, optional download, always convert.

use anyhow::Result;
use pdftool_core::cleaner;
use pdftool_core::config::PdfToolConfig;
use pdftool_core::converter;
use pdftool_core::downloader;
use pdftool_core::extract::PdfExtractor;
use pdftool_core::http::CurlFetcher;
use std::path::{Path, PathBuf};

/// Resolved parameters for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParams {
    /// Page to scrape; `None` skips the download stage.
    pub url: Option<String>,
    /// Target directory; empty means the current working directory.
    pub dir: PathBuf,
    pub delete: bool,
}

impl RunParams {
    /// A blank URL counts as no URL. `dir` is used exactly as given.
    pub fn new(url: Option<&str>, dir: &Path, delete: bool) -> Self {
        Self {
            url: url
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(str::to_string),
            dir: dir.to_path_buf(),
            delete,
        }
    }
}

pub fn run_pipeline(params: &RunParams, cfg: &PdfToolConfig) -> Result<()> {
    if params.delete {
        cleaner::delete_all_pdf_and_txt(&params.dir)?;
    }

    if let Some(url) = &params.url {
        let fetcher = CurlFetcher::from_config(cfg);
        downloader::download_all(&fetcher, url, &params.dir)?;
    }

    converter::convert_all(&PdfExtractor, &params.dir)?;
    Ok(())
}
