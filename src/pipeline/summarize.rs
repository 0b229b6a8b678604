//! Page summarization via the chat client.
//!
//! Sends page text with a fixed instruction to produce a short,
//! intro-phrase-free summary, or the [`IRRELEVANT`] sentinel when the page
//! does not pertain to the query context. All failures are absorbed here:
//! summarization never fails outward, it degrades to the sentinel.

use crate::config::Config;
use crate::llm::{ChatClient, ChatMessage, ChatRequest};
use crate::pipeline::sanitize::{clean_summary, is_prompt_echo, IRRELEVANT, MIN_SUMMARY_CHARS};

const SUMMARY_SYSTEM_PROMPT: &str = "You are a helpful assistant that provides concise summaries. \
     Summarize the content directly without any introductory phrases.";

/// Summarize `text` to roughly `config.summary_target_chars` characters.
///
/// Returns the cleaned summary, or [`IRRELEVANT`] when the model says so,
/// when the response fails the policy guards (prompt echo, or shorter than
/// [`MIN_SUMMARY_CHARS`] after cleaning), or when the service call fails.
pub async fn summarize(client: &ChatClient, config: &Config, text: &str) -> String {
    let request = build_summary_request(config, text);
    match client.chat(&request).await {
        Ok(raw) => postprocess_summary(&raw),
        Err(err) => {
            tracing::warn!(error = %err, "summarization failed, marking irrelevant");
            IRRELEVANT.to_owned()
        }
    }
}

/// Build the summarization request for one page.
pub(crate) fn build_summary_request(config: &Config, text: &str) -> ChatRequest {
    let instruction = format!(
        "Summarize the following text in about {} characters. \
         Do not include any phrases like 'Here is a summary'. \
         If the content is not relevant, just respond with '{IRRELEVANT}':\n\n{text}",
        config.summary_target_chars
    );
    ChatRequest {
        model: config.llm_model.clone(),
        messages: vec![
            ChatMessage::system(SUMMARY_SYSTEM_PROMPT),
            ChatMessage::user(instruction),
        ],
        max_tokens: config.summary_max_tokens,
        temperature: config.temperature,
    }
}

/// Clean a raw model response and apply the policy guards.
///
/// Suspiciously short or templated responses are treated as noise and
/// forced to [`IRRELEVANT`] regardless of the literal model output.
pub(crate) fn postprocess_summary(raw: &str) -> String {
    let cleaned = clean_summary(raw);
    if is_prompt_echo(&cleaned) || cleaned.chars().count() < MIN_SUMMARY_CHARS {
        return IRRELEVANT.to_owned();
    }
    cleaned
}
