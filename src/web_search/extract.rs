//! First-result link extraction from a search results page
//!
//! The search engine's result markup is not a stable interface. Everything
//! that depends on it lives here, behind `extract_first_link`, so a markup
//! change means touching this file and `RESULT_CONTAINER_SELECTOR` only.

use scraper::{Html, Selector};

use crate::error::{FetchError, FetchResult};
use crate::utils::{RESULT_CONTAINER_SELECTOR, RESULT_LINK_SELECTOR};

fn parse_selector(selector: &str) -> FetchResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| FetchError::Parse(format!("Invalid selector '{selector}': {e}")))
}

/// Extract the `href` of the first link inside the first result container
///
/// Returns `Ok(None)` when the page has no result container, or the first
/// container has no link. The `href` is returned verbatim: not trimmed, not
/// resolved against a base, not validated as a URL.
///
/// # Errors
///
/// Returns `FetchError::Parse` when the first link exists but carries no
/// `href` attribute.
pub fn extract_first_link(html: &str) -> FetchResult<Option<String>> {
    let container_selector = parse_selector(RESULT_CONTAINER_SELECTOR)?;
    let link_selector = parse_selector(RESULT_LINK_SELECTOR)?;

    let document = Html::parse_document(html);

    let Some(container) = document.select(&container_selector).next() else {
        return Ok(None);
    };
    let Some(anchor) = container.select(&link_selector).next() else {
        return Ok(None);
    };

    anchor
        .value()
        .attr("href")
        .map(|href| Some(href.to_string()))
        .ok_or_else(|| {
            FetchError::Parse("First result link has no 'href' attribute".to_string())
        })
}
