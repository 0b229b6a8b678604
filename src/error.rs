//! Error types for the language-model boundary.
//!
//! Each variant carries a stable error code (SCREAMING_SNAKE_CASE) included
//! in the Display output and accessible via [`LlmError::code()`]. Rate-limit
//! detection is a variant match, never a substring match on message text.

/// Stable error codes for programmatic error handling.
///
/// These codes never change and form part of the public API contract.
pub mod error_codes {
    /// Transport-level failure: timeout, connection refused, read error.
    pub const NETWORK_FAILURE: &str = "NETWORK_FAILURE";

    /// The service answered, but unusably: auth failure, server error, or a
    /// malformed response body.
    pub const SERVICE_FAILURE: &str = "SERVICE_FAILURE";

    /// The service signalled quota exhaustion for the current credential.
    pub const RATE_LIMITED: &str = "RATE_LIMITED";

    /// Invalid or missing configuration.
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
}

/// Errors produced by the language-model boundary.
///
/// The Display impl formats as `[CODE] message`.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Transport-level failure (timeout, connection refused, read error).
    #[error("[{}] {}", error_codes::NETWORK_FAILURE, .0)]
    Network(String),

    /// Unusable response from the service (auth, server error, bad body).
    #[error("[{}] {}", error_codes::SERVICE_FAILURE, .0)]
    Service(String),

    /// Quota exhaustion for the current credential.
    #[error("[{}] {}", error_codes::RATE_LIMITED, .0)]
    RateLimited(String),

    /// Invalid or missing configuration.
    #[error("[{}] {}", error_codes::CONFIG_INVALID, .0)]
    Config(String),
}

impl LlmError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => error_codes::NETWORK_FAILURE,
            Self::Service(_) => error_codes::SERVICE_FAILURE,
            Self::RateLimited(_) => error_codes::RATE_LIMITED,
            Self::Config(_) => error_codes::CONFIG_INVALID,
        }
    }

    /// Returns the inner message without the code prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(m) | Self::Service(m) | Self::RateLimited(m) | Self::Config(m) => m,
        }
    }

    /// Returns true if this error is a rate-limit signal, i.e. the caller
    /// should rotate credentials before retrying.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

/// Convenience alias for scry results.
pub type Result<T> = std::result::Result<T, LlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_code() {
        let err = LlmError::Network("connection refused".into());
        assert_eq!(err.code(), "NETWORK_FAILURE");
    }

    #[test]
    fn service_error_code() {
        let err = LlmError::Service("status 500".into());
        assert_eq!(err.code(), "SERVICE_FAILURE");
    }

    #[test]
    fn rate_limited_error_code() {
        let err = LlmError::RateLimited("status 429".into());
        assert_eq!(err.code(), "RATE_LIMITED");
    }

    #[test]
    fn config_error_code() {
        let err = LlmError::Config("no API keys".into());
        assert_eq!(err.code(), "CONFIG_INVALID");
    }

    #[test]
    fn display_includes_code_prefix() {
        let err = LlmError::RateLimited("too many requests".into());
        let display = format!("{err}");
        assert!(display.starts_with("[RATE_LIMITED]"));
        assert!(display.contains("too many requests"));
    }

    #[test]
    fn message_returns_inner_text() {
        let err = LlmError::Service("bad gateway".into());
        assert_eq!(err.message(), "bad gateway");
    }

    #[test]
    fn only_rate_limited_reports_rate_limited() {
        assert!(LlmError::RateLimited("x".into()).is_rate_limited());
        assert!(!LlmError::Network("x".into()).is_rate_limited());
        assert!(!LlmError::Service("x".into()).is_rate_limited());
        assert!(!LlmError::Config("x".into()).is_rate_limited());
    }

    #[test]
    fn all_codes_are_screaming_snake_case() {
        let errors = vec![
            LlmError::Network("x".into()),
            LlmError::Service("x".into()),
            LlmError::RateLimited("x".into()),
            LlmError::Config("x".into()),
        ];
        for err in &errors {
            let code = err.code();
            assert!(
                code.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "code {code:?} is not SCREAMING_SNAKE_CASE"
            );
        }
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LlmError>();
    }
}
