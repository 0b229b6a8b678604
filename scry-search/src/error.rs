//! Error types for the scry-search crate.
//!
//! All errors use stable string messages suitable for display and for
//! programmatic handling. API keys and page text never appear in error
//! messages.

/// Errors that can occur during retrieval operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request failed (transport error, timeout, or non-2xx status).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The search service returned an unusable response (auth failure,
    /// quota exhaustion, or a body that is not the documented shape).
    #[error("service error: {0}")]
    Service(String),

    /// Failed to parse a response body or a target URL.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for scry-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
