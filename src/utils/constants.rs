//! Shared configuration constants for booklinks
//!
//! Default values used to assemble a `FetchConfig`. Nothing here is read from
//! the environment; changing a default means changing this file.

use std::time::Duration;

/// Search endpoint queried for every title. The query is appended as `?q=`.
pub const SEARCH_URL: &str = "https://www.google.com/search";

/// Class marker of a result container in the search engine's markup.
///
/// This is an unstable, undocumented detail of the engine's HTML. When the
/// markup changes, extraction degrades to "No link found" for every title.
pub const RESULT_CONTAINER_SELECTOR: &str = "div.g";

/// First hyperlink inside a result container
pub const RESULT_LINK_SELECTOR: &str = "a";

/// Sentinel written when a page parsed fine but held no result link
pub const NO_LINK_FOUND: &str = "No link found";

/// Default number of request attempts per title
pub const DEFAULT_RETRIES: u32 = 3;

/// Pause between request attempts, and between connectivity re-checks
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Per-request timeout for the search GET
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between consecutive titles
pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_secs(3);

/// Address used by the connectivity probe (public DNS resolver, TCP/53)
pub const PROBE_ADDR: &str = "8.8.8.8:53";

/// Upper bound on the connectivity probe's TCP connect
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Report file written in the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "book_links.txt";

/// Browser user agent sent with every search request
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Remaining browser-impersonation headers, sent verbatim
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("accept-language", "en-US,en;q=0.5"),
    ("dnt", "1"),
    ("connection", "keep-alive"),
    ("upgrade-insecure-requests", "1"),
];
