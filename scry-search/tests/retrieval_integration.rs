//! Integration tests for the retrieval pipeline.
//!
//! Exercises search → scrape → candidate assembly against a mock HTTP
//! server standing in for both the content-search service and the result
//! pages themselves. No live network calls.

use scry_search::{retrieve, SearchConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> SearchConfig {
    SearchConfig {
        api_url: server.uri(),
        api_key: "test-key".into(),
        timeout_seconds: 5,
        scrape_timeout_seconds: 5,
        user_agent: Some("TestBot/1.0".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn retrieve_prefers_freshly_scraped_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "url": format!("{}/page", server.uri()),
                "title": "Example Page",
                "text": "stale cached text"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body><p>Fresh live text</p><script>var x;</script></body></html>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let pages = retrieve("example", 5, &config_for(&server)).await;
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].title, "Example Page");
    assert_eq!(pages[0].raw_text, "Fresh live text");
}

#[tokio::test]
async fn retrieve_falls_back_to_cached_text_when_scrape_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "url": format!("{}/gone", server.uri()),
                "title": "Gone Page",
                "text": "service cached text"
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let pages = retrieve("example", 5, &config_for(&server)).await;
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].raw_text, "service cached text");
}

#[tokio::test]
async fn retrieve_empty_text_when_scrape_and_cache_both_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "url": format!("{}/blank", server.uri()),
                "title": "Blank Page"
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blank"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>   </body></html>"))
        .mount(&server)
        .await;

    let pages = retrieve("example", 5, &config_for(&server)).await;
    assert_eq!(pages.len(), 1);
    assert!(pages[0].raw_text.is_empty());
}

#[tokio::test]
async fn retrieve_sends_wire_format_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({
            "query": "rust programming",
            "type": "neural",
            "useAutoprompt": true,
            "numResults": 3,
            "contents": {"text": true, "highlights": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let pages = retrieve("rust programming", 3, &config_for(&server)).await;
    assert!(pages.is_empty());
}

#[tokio::test]
async fn retrieve_absorbs_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let pages = retrieve("example", 5, &config_for(&server)).await;
    assert!(pages.is_empty());
}

#[tokio::test]
async fn retrieve_absorbs_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let pages = retrieve("example", 5, &config_for(&server)).await;
    assert!(pages.is_empty());
}

#[tokio::test]
async fn retrieve_absorbs_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let pages = retrieve("example", 5, &config_for(&server)).await;
    assert!(pages.is_empty());
}

#[tokio::test]
async fn retrieve_preserves_service_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"url": format!("{}/a", server.uri()), "title": "First", "text": "a"},
                {"url": format!("{}/b", server.uri()), "title": "Second", "text": "b"},
                {"url": format!("{}/c", server.uri()), "title": "Third", "text": "c"}
            ]
        })))
        .mount(&server)
        .await;

    // No page mocks mounted: every scrape 404s and falls back to cached text.
    let pages = retrieve("example", 5, &config_for(&server)).await;
    let titles: Vec<&str> = pages.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}
