//! Anchor extraction from a fetched page.

use scraper::{Html, Selector};
use std::sync::LazyLock;

const ANCHOR_SELECTOR_STR: &str = "a";

static ANCHOR_SELECTOR: LazyLock<Option<Selector>> = LazyLock::new(|| {
    Selector::parse(ANCHOR_SELECTOR_STR)
        .map_err(|e| tracing::error!("failed to parse selector '{}': {}", ANCHOR_SELECTOR_STR, e))
        .ok()
});

/// Anchors found on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorScan {
    /// Number of `<a>` elements, with or without `href`.
    pub anchors: usize,
    /// Non-empty `href` values in document order.
    pub hrefs: Vec<String>,
}

/// Parses `html` and collects every anchor's `href`.
pub fn scan_anchors(html: &str) -> AnchorScan {
    let Some(selector) = ANCHOR_SELECTOR.as_ref() else {
        return AnchorScan::default();
    };
    let document = Html::parse_document(html);

    let mut scan = AnchorScan::default();
    for element in document.select(selector) {
        scan.anchors += 1;
        match element.value().attr("href").map(str::trim) {
            Some(href) if !href.is_empty() => scan.hrefs.push(href.to_string()),
            _ => {}
        }
    }
    tracing::debug!("found {} anchors, {} with href", scan.anchors, scan.hrefs.len());
    scan
}
