//! Filename extraction from a URL or filesystem path.

use super::percent::percent_decode;

/// Returns the percent-decoded text after the last `/`, or `s` itself when it has no `/`.
///
/// Query strings are kept; `a.pdf?x=1` stays `a.pdf?x=1`.
pub fn file_name_from_path_or_url(s: &str) -> String {
    match s.rsplit_once('/') {
        Some((_, last)) => percent_decode(last),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_decoded_last_segment() {
        assert_eq!(
            file_name_from_path_or_url("https://example.org/docs/spec%20v2.pdf"),
            "spec v2.pdf"
        );
    }

    #[test]
    fn bare_name_unchanged() {
        assert_eq!(file_name_from_path_or_url("report%20a.pdf"), "report%20a.pdf");
    }

    #[test]
    fn filesystem_path() {
        assert_eq!(file_name_from_path_or_url("out/dir/a.pdf"), "a.pdf");
    }

    #[test]
    fn trailing_slash_yields_empty() {
        assert_eq!(file_name_from_path_or_url("https://example.org/docs/"), "");
    }
}
