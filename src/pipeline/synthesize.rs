//! Answer synthesis with rate-limit-driven credential rotation.
//!
//! One chat call per attempt, up to the configured maximum. A rate-limit
//! failure rotates the key pool, rebuilds the client with the new
//! credential, and pauses before the next attempt; any other failure
//! retries on the same credential. Exhaustion yields a fixed benign string
//! — the caller never sees an error.

use crate::config::Config;
use crate::credentials::KeyPool;
use crate::llm::{ChatClient, ChatMessage, ChatRequest};
use std::time::Duration;

/// The answer returned when every attempt fails.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't generate a response due to an error.";

const ANSWER_SYSTEM_PROMPT: &str = "You are an AI assistant for a web search and analysis application. \
     Answer the user's question using only the context assembled from web sources, \
     synthesizing across sources to give a comprehensive answer. \
     When the context does not contain enough information to answer fully, say so \
     clearly and give the best answer the available context supports. \
     Keep a neutral, informative tone, avoid speculating beyond the provided \
     context, and prefer accuracy over completeness when information is limited. \
     Your knowledge is limited to the context provided with each question.";

/// Synthesize an answer to `query` from `context`.
///
/// `context` is the retained summaries joined by blank lines; empty context
/// is valid input (the model is expected to flag the insufficiency), not an
/// error. The pool cursor advances once per rate-limited attempt and is
/// never reset, so subsequent calls resume from wherever it was left.
pub async fn synthesize(config: &Config, keys: &KeyPool, query: &str, context: &str) -> String {
    let mut client = match ChatClient::new(&config.llm_api_url, &keys.current()) {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(error = %err, "cannot build chat client");
            return FALLBACK_ANSWER.to_owned();
        }
    };

    let request = build_answer_request(config, query, context);

    for attempt in 1..=config.max_attempts {
        match client.chat(&request).await {
            Ok(text) => return text.trim().to_owned(),
            Err(err) if err.is_rate_limited() => {
                tracing::warn!(attempt, error = %err, "rate limited, rotating credential");
                let key = keys.rotate();
                client = match ChatClient::new(&config.llm_api_url, &key) {
                    Ok(client) => client,
                    Err(err) => {
                        tracing::warn!(error = %err, "cannot rebuild chat client");
                        return FALLBACK_ANSWER.to_owned();
                    }
                };
                if attempt < config.max_attempts {
                    tokio::time::sleep(Duration::from_millis(config.rotation_pause_ms)).await;
                }
            }
            Err(err) => {
                // Retry on the same credential unless this was the last attempt.
                tracing::warn!(attempt, error = %err, "answer generation failed");
            }
        }
    }

    FALLBACK_ANSWER.to_owned()
}

/// Build the synthesis request: fixed persona plus the combined context and
/// the original question.
pub(crate) fn build_answer_request(config: &Config, query: &str, context: &str) -> ChatRequest {
    let content = format!("Context: {context}\n\nQuestion: {query}\n\nAnswer:");
    ChatRequest {
        model: config.llm_model.clone(),
        messages: vec![
            ChatMessage::system(ANSWER_SYSTEM_PROMPT),
            ChatMessage::user(content),
        ],
        max_tokens: config.answer_max_tokens,
        temperature: config.temperature,
    }
}
