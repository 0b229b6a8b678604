//! OpenAI-compatible chat-completions client.
//!
//! One non-streaming client serves both the summarizer and the synthesizer.
//! Works against any server implementing the chat completions API; the
//! default endpoint is the Groq-hosted one.
//!
//! Failures are mapped to structured [`LlmError`] variants at this boundary
//! (HTTP 429 becomes [`LlmError::RateLimited`]), so callers branch on the
//! error kind rather than inspecting message text.

use crate::error::{LlmError, Result};
use serde::{Deserialize, Serialize};

/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// A single message in a chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `"system"`, `"user"`, or `"assistant"`.
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// A complete chat-completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Ordered conversation messages.
    pub messages: Vec<ChatMessage>,
    /// Completion token budget.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Non-streaming chat-completions client bound to one API key.
///
/// Rebuild with [`ChatClient::new`] after a credential rotation; the client
/// itself never mutates its key.
pub struct ChatClient {
    api_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ChatClient {
    /// Create a client for `api_url` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] if either argument is blank, or
    /// [`LlmError::Network`] if the HTTP client cannot be constructed.
    pub fn new(api_url: &str, api_key: &str) -> Result<Self> {
        if api_url.trim().is_empty() {
            return Err(LlmError::Config("api_url must not be empty".into()));
        }
        if api_key.trim().is_empty() {
            return Err(LlmError::Config("api_key must not be empty".into()));
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            client,
        })
    }

    /// Send a chat request and return the assistant's message text.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Network`] on transport failure
    /// - [`LlmError::RateLimited`] when the service returns HTTP 429
    /// - [`LlmError::Service`] on any other non-2xx status or an
    ///   unparseable body
    pub async fn chat(&self, request: &ChatRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Network(format!("chat request failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::RateLimited(format!(
                "chat service returned status 429: {}",
                truncate_body(&body)
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Service(format!(
                "chat service returned status {status}: {}",
                truncate_body(&body)
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Network(format!("chat response read failed: {e}")))?;

        parse_chat_response(&body)
    }
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Parse a chat-completion response body into the assistant text.
///
/// Extracted as a separate function for testability with canned JSON.
pub(crate) fn parse_chat_response(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::Service(format!("unexpected chat response: {e}")))?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::Service("chat response has no choices".into()))?;
    Ok(choice.message.content.unwrap_or_default())
}

/// Bound error-body excerpts so logs stay readable.
fn truncate_body(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    &body[..end]
}
