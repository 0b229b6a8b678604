//! The retrieve → summarize → rank → synthesize pipeline.
//!
//! Control flows strictly forward: candidates are retrieved, each page is
//! summarized one after another, survivors are ranked, and the top
//! summaries become the context for a single synthesized answer. There is
//! no feedback loop and no parallel fan-out; total latency scales linearly
//! with the number of candidates.

pub mod rank;
pub mod sanitize;
pub mod summarize;
pub mod synthesize;

pub use rank::RankedSource;
pub use sanitize::IRRELEVANT;
pub use synthesize::FALLBACK_ANSWER;

use crate::config::Config;
use crate::credentials::KeyPool;
use crate::error::LlmError;
use crate::llm::ChatClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::Instrument;

/// What one query produces: the ranked sources shown to the user and the
/// synthesized answer. These are the pipeline's only outward shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Retained sources, best first: `{title, url, summary}` plus score.
    pub sources: Vec<RankedSource>,
    /// The synthesized answer text, or a benign failure string.
    pub text: String,
}

/// One configured pipeline instance.
///
/// Holds the configuration and the shared credential pool; the pool's
/// cursor persists across queries for the lifetime of this value.
pub struct Pipeline {
    config: Config,
    keys: Arc<KeyPool>,
}

impl Pipeline {
    /// Create a pipeline from a validated configuration and a key pool.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] if the configuration is invalid.
    pub fn new(config: Config, keys: Arc<KeyPool>) -> Result<Self, LlmError> {
        config.validate()?;
        Ok(Self { config, keys })
    }

    /// Answer `query`: retrieve, summarize, rank, synthesize.
    ///
    /// Never fails. Every stage degrades internally (no candidates, empty
    /// page text, sentinel summaries, fallback answer), so the caller
    /// always receives an [`Answer`] — possibly with zero sources and a
    /// context-insufficiency or fallback text.
    pub async fn answer(&self, query: &str) -> Answer {
        let run_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("query", %run_id);
        self.answer_inner(query).instrument(span).await
    }

    async fn answer_inner(&self, query: &str) -> Answer {
        tracing::info!("answering query");

        let pages =
            scry_search::retrieve(query, self.config.num_results, &self.config.search).await;
        tracing::info!(candidates = pages.len(), "retrieval complete");

        let client = match ChatClient::new(&self.config.llm_api_url, &self.keys.current()) {
            Ok(client) => client,
            Err(err) => {
                tracing::warn!(error = %err, "cannot build chat client");
                return Answer {
                    sources: Vec::new(),
                    text: FALLBACK_ANSWER.to_owned(),
                };
            }
        };

        let mut pairs = Vec::with_capacity(pages.len());
        for page in pages {
            let summary = summarize::summarize(&client, &self.config, &page.raw_text).await;
            tracing::debug!(url = %page.url, relevant = summary != IRRELEVANT, "page summarized");
            pairs.push((page, summary));
        }

        let sources = rank::rank(pairs, self.config.top_n);
        tracing::info!(retained = sources.len(), "ranking complete");

        let context = sources
            .iter()
            .map(|s| s.summary.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let text = synthesize::synthesize(&self.config, &self.keys, query, &context).await;

        Answer { sources, text }
    }
}
