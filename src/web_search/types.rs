//! Outcome of resolving one title

use std::fmt;

use crate::utils::NO_LINK_FOUND;

/// What a single search resolved to
///
/// Every variant is written to the report; failures are recorded, never
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Raw `href` of the first result link, exactly as it appeared in the page
    Link(String),

    /// The page was fetched and parsed but held no result link
    NotFound,

    /// Human-readable failure description, already prefixed with `Error`
    Failed(String),
}

impl SearchOutcome {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(href) => f.write_str(href),
            Self::NotFound => f.write_str(NO_LINK_FOUND),
            Self::Failed(message) => f.write_str(message),
        }
    }
}
