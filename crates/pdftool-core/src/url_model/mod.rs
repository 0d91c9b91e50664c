//! URL modeling for scraped links.
//!
//! Classifies hrefs (PDF or not, absolute or relative), derives the base URL of
//! a page and resolves relative links against it, and derives local filenames.

mod path;
mod percent;

pub use path::file_name_from_path_or_url;

use thiserror::Error;
use url::Url;

/// Marker that classifies an href as absolute.
const ABSOLUTE_MARKER: &str = "https://";

/// Marker that classifies an href as a PDF reference.
const PDF_MARKER: &str = ".pdf";

#[derive(Debug, Error)]
pub enum UrlModelError {
    #[error("cannot parse URL {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL {0} has no scheme and host")]
    NoHost(String),
    #[error("relative link {0} cannot be resolved without a base URL")]
    NoBaseUrl(String),
}

/// True if the href mentions `.pdf` anywhere, query string and fragment included.
pub fn is_pdf_href(href: &str) -> bool {
    href.contains(PDF_MARKER)
}

/// True if the href contains the literal `https://` marker.
pub fn is_absolute_href(href: &str) -> bool {
    href.contains(ABSOLUTE_MARKER)
}

/// Returns `<scheme>://<host>[:port]` of `url`.
pub fn base_url(url: &str) -> Result<String, UrlModelError> {
    let parsed = Url::parse(url).map_err(|source| UrlModelError::Parse {
        url: url.to_string(),
        source,
    })?;
    let origin = parsed.origin();
    if parsed.host_str().is_none() || !origin.is_tuple() {
        return Err(UrlModelError::NoHost(url.to_string()));
    }
    Ok(origin.ascii_serialization())
}

/// Resolves an href to an absolute URL.
///
/// Hrefs carrying the `https://` marker are returned unchanged. Anything else is
/// joined onto `base` as a path, so separators are never doubled or dropped.
pub fn resolve_href(base: Option<&str>, href: &str) -> Result<String, UrlModelError> {
    if is_absolute_href(href) {
        return Ok(href.to_string());
    }
    let base = base.ok_or_else(|| UrlModelError::NoBaseUrl(href.to_string()))?;
    let parse_err = |source: url::ParseError| UrlModelError::Parse {
        url: href.to_string(),
        source,
    };
    let base = Url::parse(base).map_err(parse_err)?;
    let joined = base.join(href).map_err(parse_err)?;
    Ok(joined.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_href_is_substring_match() {
        assert!(is_pdf_href("report.pdf"));
        assert!(is_pdf_href("/download?file=report.pdf&x=1"));
        assert!(is_pdf_href("page.html#see-report.pdf"));
        assert!(!is_pdf_href("about.html"));
    }

    #[test]
    fn base_url_keeps_scheme_host_and_port() {
        assert_eq!(
            base_url("https://example.org/docs/index.html?q=1").unwrap(),
            "https://example.org"
        );
        assert_eq!(
            base_url("http://127.0.0.1:8080/page").unwrap(),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn base_url_without_scheme_fails() {
        assert!(matches!(
            base_url("example.org/page"),
            Err(UrlModelError::Parse { .. })
        ));
        assert!(matches!(
            base_url("mailto:someone@example.org"),
            Err(UrlModelError::NoHost(_))
        ));
    }

    #[test]
    fn relative_href_joins_base() {
        assert_eq!(
            resolve_href(Some("https://example.org"), "report.pdf").unwrap(),
            "https://example.org/report.pdf"
        );
        assert_eq!(
            resolve_href(Some("https://example.org"), "/docs/report.pdf").unwrap(),
            "https://example.org/docs/report.pdf"
        );
    }

    #[test]
    fn absolute_href_is_unchanged() {
        assert_eq!(
            resolve_href(Some("https://example.org"), "https://cdn.example.com/x.pdf").unwrap(),
            "https://cdn.example.com/x.pdf"
        );
        assert_eq!(
            resolve_href(None, "https://cdn.example.com/x.pdf").unwrap(),
            "https://cdn.example.com/x.pdf"
        );
    }

    #[test]
    fn plain_http_href_survives_join() {
        assert_eq!(
            resolve_href(Some("https://example.org"), "http://mirror.example.net/a.pdf").unwrap(),
            "http://mirror.example.net/a.pdf"
        );
    }

    #[test]
    fn relative_href_without_base_fails() {
        assert!(matches!(
            resolve_href(None, "report.pdf"),
            Err(UrlModelError::NoBaseUrl(_))
        ));
    }
}
