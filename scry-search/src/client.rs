//! Content-search API client.
//!
//! Speaks the hosted neural search wire format: a single POST carrying the
//! query with autoprompt expansion and content extraction flags, returning
//! an ordered list of hits with cached page text and highlights.

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::http;
use crate::types::SearchHit;
use serde::{Deserialize, Serialize};

/// Client for the content-search service.
pub struct SearchClient {
    config: SearchConfig,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    #[serde(rename = "type")]
    search_type: &'a str,
    use_autoprompt: bool,
    num_results: usize,
    contents: ContentsSpec,
}

#[derive(Debug, Serialize)]
struct ContentsSpec {
    text: bool,
    highlights: bool,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchHit>,
}

impl SearchClient {
    /// Create a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let client = http::build_api_client(&config)?;
        Ok(Self { config, client })
    }

    /// Issue a neural search and return up to `count` hits with content.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] on transport failure,
    /// [`SearchError::Service`] on a non-2xx status, and
    /// [`SearchError::Parse`] when the response body is not the documented
    /// shape.
    pub async fn search_and_contents(&self, query: &str, count: usize) -> Result<Vec<SearchHit>> {
        tracing::trace!(query, count, "content search");

        let request = SearchRequest {
            query,
            search_type: "neural",
            use_autoprompt: self.config.autoprompt,
            num_results: count,
            contents: ContentsSpec {
                text: true,
                highlights: true,
            },
        };

        let url = format!("{}/search", self.config.api_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("search request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Service(format!(
                "search service returned status {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("search response read failed: {e}")))?;

        let hits = parse_search_response(&body)?;
        tracing::debug!(count = hits.len(), "search hits received");
        Ok(hits)
    }
}

/// Parse a search response body into hits.
///
/// Extracted as a separate function for testability with canned JSON.
pub(crate) fn parse_search_response(body: &str) -> Result<Vec<SearchHit>> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("unexpected search response: {e}")))?;
    Ok(response.results)
}
