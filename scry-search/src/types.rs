//! Core types for search hits and candidate pages.

use serde::{Deserialize, Serialize};

/// A single hit returned by the content-search service.
///
/// `text` is the service's cached extract of the page; `highlights` are the
/// service's most-relevant excerpts. Both may be empty depending on what the
/// service has indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The URL of the result page.
    pub url: String,
    /// The title of the result page.
    #[serde(default)]
    pub title: String,
    /// Cached page text as held by the search service.
    #[serde(default)]
    pub text: String,
    /// Relevance-ordered excerpts selected by the service.
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// A search hit paired with its page text, ready for summarization.
///
/// Created by [`retrieve`](crate::retrieve); immutable once created.
/// `raw_text` prefers a freshly scraped version of the page over the search
/// service's cached text, and may be empty when both are unavailable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatePage {
    /// The URL of the page.
    pub url: String,
    /// The title of the page, as reported by the search service.
    pub title: String,
    /// Extracted page text. Empty means "no content", not an error.
    pub raw_text: String,
}
