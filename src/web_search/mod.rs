//! Web search for a single title
//!
//! Builds the search URL, fetches the results page over HTTP and pulls the
//! first result link out of the HTML, retrying transient failures.
//!
//! The extraction relies on the search engine's `div.g` result container, an
//! undocumented markup detail that can change at any time. When it does,
//! searches degrade to `SearchOutcome::NotFound` rather than failing.

mod client;
mod delay;
mod executor;
mod extract;
mod types;

pub use client::{HttpSearchBackend, SearchBackend, build_search_url};
pub use delay::{Delay, TokioDelay};
pub use executor::SearchExecutor;
pub use extract::extract_first_link;
pub use types::SearchOutcome;
