//! Application configuration, read once from the environment at startup.
//!
//! Connection details come from `SCRY_*` environment variables; everything
//! else has defaults tuned for the hosted services. Rotation of credentials
//! never re-reads the environment — the key list captured here is final for
//! the process lifetime.

use crate::error::LlmError;
use crate::llm;
use scry_search::SearchConfig;

/// Maximum number of numbered `SCRY_LLM_API_KEY_<n>` variables scanned.
const MAX_NUMBERED_KEYS: usize = 9;

/// Configuration for one pipeline instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// Retrieval configuration (search service + scraping).
    pub search: SearchConfig,
    /// Chat-completions endpoint base URL.
    pub llm_api_url: String,
    /// Model identifier for both summarization and synthesis.
    pub llm_model: String,
    /// Ordered language-model API keys for the rotation pool.
    pub llm_keys: Vec<String>,
    /// How many candidate pages to retrieve per query.
    pub num_results: usize,
    /// How many ranked sources feed the synthesizer.
    pub top_n: usize,
    /// Target summary length in characters.
    pub summary_target_chars: usize,
    /// Completion budget for one summary.
    pub summary_max_tokens: u32,
    /// Completion budget for the synthesized answer.
    pub answer_max_tokens: u32,
    /// Sampling temperature for both LLM calls.
    pub temperature: f32,
    /// Synthesizer attempts before giving up.
    pub max_attempts: usize,
    /// Pause after a credential rotation, in milliseconds.
    pub rotation_pause_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            llm_api_url: llm::DEFAULT_API_URL.into(),
            llm_model: llm::DEFAULT_MODEL.into(),
            llm_keys: Vec::new(),
            num_results: 5,
            top_n: 3,
            summary_target_chars: 150,
            summary_max_tokens: 100,
            answer_max_tokens: 1000,
            temperature: 0.7,
            max_attempts: 3,
            rotation_pause_ms: 2000,
        }
    }
}

impl Config {
    /// Build a configuration from the process environment.
    ///
    /// Required variables:
    /// - `SCRY_SEARCH_API_KEY` — content-search service key
    /// - `SCRY_LLM_API_KEY` or `SCRY_LLM_API_KEY_1`..`_9` — at least one
    ///   language-model key; numbered keys are collected in order into the
    ///   rotation pool
    ///
    /// Optional overrides: `SCRY_SEARCH_API_URL`, `SCRY_LLM_API_URL`,
    /// `SCRY_LLM_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] when a required variable is missing or
    /// the assembled configuration fails validation.
    pub fn from_env() -> Result<Self, LlmError> {
        let mut config = Self::default();

        config.search.api_key = env_trimmed("SCRY_SEARCH_API_KEY")
            .ok_or_else(|| LlmError::Config("SCRY_SEARCH_API_KEY is not set".into()))?;
        if let Some(url) = env_trimmed("SCRY_SEARCH_API_URL") {
            config.search.api_url = url;
        }

        if let Some(url) = env_trimmed("SCRY_LLM_API_URL") {
            config.llm_api_url = url;
        }
        if let Some(model) = env_trimmed("SCRY_LLM_MODEL") {
            config.llm_model = model;
        }

        config.llm_keys = keys_from_env();
        if config.llm_keys.is_empty() {
            return Err(LlmError::Config(
                "no language-model API key set (SCRY_LLM_API_KEY or SCRY_LLM_API_KEY_1..)".into(),
            ));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), LlmError> {
        self.search
            .validate()
            .map_err(|e| LlmError::Config(e.to_string()))?;
        if self.llm_api_url.trim().is_empty() {
            return Err(LlmError::Config("llm_api_url must not be empty".into()));
        }
        if self.llm_model.trim().is_empty() {
            return Err(LlmError::Config("llm_model must not be empty".into()));
        }
        if self.llm_keys.is_empty() {
            return Err(LlmError::Config("llm_keys must not be empty".into()));
        }
        if self.num_results == 0 {
            return Err(LlmError::Config("num_results must be greater than 0".into()));
        }
        if self.top_n == 0 {
            return Err(LlmError::Config("top_n must be greater than 0".into()));
        }
        if self.summary_target_chars == 0 {
            return Err(LlmError::Config(
                "summary_target_chars must be greater than 0".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(LlmError::Config("max_attempts must be greater than 0".into()));
        }
        Ok(())
    }
}

/// Collect the key pool from the environment: the bare variable first, then
/// numbered variants in ascending order.
fn keys_from_env() -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(key) = env_trimmed("SCRY_LLM_API_KEY") {
        keys.push(key);
    }
    for n in 1..=MAX_NUMBERED_KEYS {
        if let Some(key) = env_trimmed(&format!("SCRY_LLM_API_KEY_{n}")) {
            keys.push(key);
        }
    }
    keys
}

fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
