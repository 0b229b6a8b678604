//! Chat client contract tests.
//!
//! Verify exact HTTP format compliance for the chat-completions client:
//! request body fields, authentication header, response parsing, and the
//! mapping from HTTP statuses to structured [`LlmError`] variants.

use scry::llm::{ChatClient, ChatMessage, ChatRequest};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> ChatRequest {
    ChatRequest {
        model: "llama3-70b-8192".into(),
        messages: vec![
            ChatMessage::system("You are concise."),
            ChatMessage::user("Hello"),
        ],
        max_tokens: 100,
        temperature: 0.7,
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn request_includes_required_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "llama3-70b-8192",
            "messages": [
                {"role": "system", "content": "You are concise."},
                {"role": "user", "content": "Hello"}
            ],
            "max_tokens": 100
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hi")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri(), "test-key").expect("client");
    let text = client.chat(&request()).await.expect("should succeed");
    assert_eq!(text, "Hi");
}

#[tokio::test]
async fn request_carries_bearer_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok response")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri(), "test-key").expect("client");
    assert!(client.chat(&request()).await.is_ok());
}

#[tokio::test]
async fn http_429_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "Rate limit reached", "type": "tokens"}
        })))
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri(), "test-key").expect("client");
    let err = client.chat(&request()).await.unwrap_err();
    assert!(err.is_rate_limited());
    assert_eq!(err.code(), "RATE_LIMITED");
}

#[tokio::test]
async fn http_401_maps_to_service_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri(), "bad-key").expect("client");
    let err = client.chat(&request()).await.unwrap_err();
    assert_eq!(err.code(), "SERVICE_FAILURE");
    assert!(!err.is_rate_limited());
}

#[tokio::test]
async fn http_500_maps_to_service_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri(), "test-key").expect("client");
    let err = client.chat(&request()).await.unwrap_err();
    assert_eq!(err.code(), "SERVICE_FAILURE");
}

#[tokio::test]
async fn malformed_success_body_maps_to_service_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri(), "test-key").expect("client");
    let err = client.chat(&request()).await.unwrap_err();
    assert_eq!(err.code(), "SERVICE_FAILURE");
}

#[tokio::test]
async fn response_content_returned_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("  Widgets are great.  ")),
        )
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri(), "test-key").expect("client");
    let text = client.chat(&request()).await.expect("should succeed");
    // The client does not trim; callers decide.
    assert_eq!(text, "  Widgets are great.  ");
}
