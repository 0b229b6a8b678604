//! # scry-search
//!
//! Retrieval for scry: neural content search plus live page scraping.
//!
//! This crate turns a query string into a bounded list of candidate pages.
//! It asks a hosted content-search service for relevant URLs (with the
//! service's cached text), then fetches each page over plain HTTP and
//! extracts its visible text, preferring the live version over the cache.
//!
//! ## Design
//!
//! - One POST to the search service per query, autoprompt-expanded
//! - Pages fetched strictly one after another — no parallel fan-out
//! - `<script>`/`<style>` stripped, whitespace collapsed to clean lines
//! - Fail soft: any search-service failure yields an empty candidate list,
//!   any scrape failure yields an empty string; errors never propagate to
//!   the caller
//!
//! ## Security
//!
//! - The API key is sent only as a request header and never logged
//! - Queries and page text are logged at trace level only

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod http;
pub mod types;

pub use client::SearchClient;
pub use config::SearchConfig;
pub use content::scrape;
pub use error::{Result, SearchError};
pub use types::{CandidatePage, SearchHit};

/// Retrieve up to `count` candidate pages for `query`.
///
/// Issues a content search, then scrapes each hit's URL in order. The
/// freshly scraped text replaces the service's cached text; when the scrape
/// comes back empty the cached text is kept instead, so `raw_text` is empty
/// only when both are.
///
/// Never fails: on any search-service failure (invalid configuration,
/// network error, auth error, malformed response) the failure is logged at
/// warn level and an empty list is returned. Downstream stages must
/// tolerate zero candidates.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// let config = scry_search::SearchConfig {
///     api_key: "…".into(),
///     ..Default::default()
/// };
/// let pages = scry_search::retrieve("best electric cars", 5, &config).await;
/// for page in &pages {
///     println!("{}: {}", page.title, page.url);
/// }
/// # }
/// ```
pub async fn retrieve(query: &str, count: usize, config: &SearchConfig) -> Vec<CandidatePage> {
    let hits = match search_hits(query, count, config).await {
        Ok(hits) => hits,
        Err(err) => {
            tracing::warn!(error = %err, "content search failed, returning no candidates");
            return Vec::new();
        }
    };

    let mut pages = Vec::with_capacity(hits.len());
    for hit in hits {
        let scraped = scrape(&hit.url, config).await;
        let raw_text = if scraped.is_empty() { hit.text } else { scraped };
        pages.push(CandidatePage {
            url: hit.url,
            title: hit.title,
            raw_text,
        });
    }

    tracing::debug!(count = pages.len(), "candidates retrieved");
    pages
}

async fn search_hits(query: &str, count: usize, config: &SearchConfig) -> Result<Vec<SearchHit>> {
    let client = SearchClient::new(config.clone())?;
    client.search_and_contents(query, count).await
}
