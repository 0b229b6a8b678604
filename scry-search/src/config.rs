//! Retrieval configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the search service endpoint, how many results
//! are requested, and how pages are fetched. The defaults match the hosted
//! neural search API and polite scraping behaviour.

use crate::error::SearchError;

/// Configuration for retrieval and page scraping.
///
/// Use [`Default::default()`] and fill in `api_key`, or construct with field
/// overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the content-search service.
    pub api_url: String,
    /// API key for the content-search service.
    pub api_key: String,
    /// How many results to request per query.
    pub num_results: usize,
    /// Whether to let the service expand the query before searching.
    pub autoprompt: bool,
    /// Search request timeout in seconds.
    pub timeout_seconds: u64,
    /// Per-page scrape timeout in seconds.
    pub scrape_timeout_seconds: u64,
    /// Maximum characters of scraped text kept per page.
    pub max_text_chars: usize,
    /// Custom User-Agent string for page fetches. If `None`, rotates through
    /// a built-in list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.exa.ai".into(),
            api_key: String::new(),
            num_results: 5,
            autoprompt: true,
            timeout_seconds: 10,
            scrape_timeout_seconds: 10,
            max_text_chars: 100_000,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `api_url` and `api_key` must be non-empty
    /// - `num_results` must be greater than 0
    /// - both timeouts must be greater than 0
    /// - `max_text_chars` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.api_url.trim().is_empty() {
            return Err(SearchError::Config("api_url must not be empty".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(SearchError::Config("api_key must not be empty".into()));
        }
        if self.num_results == 0 {
            return Err(SearchError::Config(
                "num_results must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.scrape_timeout_seconds == 0 {
            return Err(SearchError::Config(
                "scrape_timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.max_text_chars == 0 {
            return Err(SearchError::Config(
                "max_text_chars must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
