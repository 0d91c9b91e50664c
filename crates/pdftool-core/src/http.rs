//! HTTP GET via the curl crate (libcurl).
//!
//! Pages and PDFs are fetched through the [`HttpFetch`] trait so the pipeline can
//! run against a stub in tests.

use crate::config::PdfToolConfig;
use std::io::{self, Write};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection refused, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
    /// The response body could not be written to its sink.
    #[error("failed to store response body: {0}")]
    Sink(#[source] io::Error),
}

/// A fully buffered response.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        is_success(self.status)
    }
}

pub fn is_success(status: u32) -> bool {
    (200..300).contains(&status)
}

/// Capability to GET a URL.
pub trait HttpFetch {
    /// Streams the body of `url` into `sink` and returns the final status code.
    fn fetch_into(&self, url: &str, sink: &mut dyn Write) -> Result<u32, FetchError>;

    /// Fetches `url` into memory.
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let mut body = Vec::new();
        let status = self.fetch_into(url, &mut body)?;
        Ok(FetchResponse { status, body })
    }
}

/// [`HttpFetch`] backed by a fresh curl Easy handle per request.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Option<Duration>,
    max_redirections: u32,
    user_agent: String,
}

impl CurlFetcher {
    pub fn from_config(cfg: &PdfToolConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: (cfg.request_timeout_secs > 0)
                .then(|| Duration::from_secs(cfg.request_timeout_secs)),
            max_redirections: cfg.max_redirections,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::from_config(&PdfToolConfig::default())
    }
}

impl HttpFetch for CurlFetcher {
    fn fetch_into(&self, url: &str, sink: &mut dyn Write) -> Result<u32, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirections)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        if let Some(timeout) = self.timeout {
            easy.timeout(timeout)?;
        }

        let mut sink_error: Option<io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match sink.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    sink_error = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };
        if let Some(e) = sink_error {
            return Err(FetchError::Sink(e));
        }
        performed?;

        let code = easy.response_code()?;
        tracing::debug!("GET {} -> HTTP {}", url, code);
        Ok(code)
    }
}
