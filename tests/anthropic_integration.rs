//! Integration tests for the Anthropic completion client.
//!
//! Most tests run against a local mock server and cover the wire format and
//! error mapping. The `#[ignore]`d tests make real API calls; run with:
//! ANTHROPIC_API_KEY=your_key cargo test --test anthropic_integration -- --ignored

use httpmock::prelude::*;
use serde_json::json;

use claude_responder::llm::{AnthropicClient, CompletionRequest, ANTHROPIC_API_BASE, CLAUDE_MODEL};
use claude_responder::CompletionError;

#[tokio::test]
async fn client_sends_expected_http_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/messages")
            .header("x-api-key", "test-anthropic-key")
            .header("anthropic-version", "2023-06-01")
            .json_body_includes(
                json!({
                    "model": "claude-3-5-sonnet-20241022",
                    "max_tokens": 2000,
                    "messages": [{"role": "user", "content": "What is Rust?"}]
                })
                .to_string(),
            );

        then.status(200).json_body(json!({
            "content": [{"type": "text", "text": "A systems programming language."}],
            "usage": {"input_tokens": 12, "output_tokens": 6}
        }));
    });

    let client = AnthropicClient::new("test-anthropic-key", server.base_url());
    let completion = client
        .complete(CompletionRequest::new(CLAUDE_MODEL, "What is Rust?"))
        .await
        .expect("completion should succeed");

    mock.assert();
    assert_eq!(completion.text, "A systems programming language.");
    assert_eq!(completion.input_tokens, 12);
    assert_eq!(completion.output_tokens, 6);
}

#[tokio::test]
async fn client_joins_multiple_text_blocks() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200).json_body(json!({
            "content": [
                {"type": "text", "text": "First. "},
                {"type": "tool_use", "id": "tu_1", "name": "lookup", "input": {}},
                {"type": "text", "text": "Second."}
            ],
            "usage": {"input_tokens": 3, "output_tokens": 2}
        }));
    });

    let client = AnthropicClient::new("key", server.base_url());
    let completion = client
        .complete(CompletionRequest::new(CLAUDE_MODEL, "hello"))
        .await
        .expect("completion should succeed");

    assert_eq!(completion.text, "First. Second.");
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(401).json_body(json!({
            "type": "error",
            "error": {"type": "authentication_error", "message": "invalid x-api-key"}
        }));
    });

    let client = AnthropicClient::new("bad-key", server.base_url());
    let result = client
        .complete(CompletionRequest::new(CLAUDE_MODEL, "hello"))
        .await;

    match result {
        Err(CompletionError::AuthenticationFailure(detail)) => {
            assert!(detail.contains("invalid x-api-key"));
        }
        other => panic!("Expected AuthenticationFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn forbidden_maps_to_authentication_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(403).body("forbidden");
    });

    let client = AnthropicClient::new("key", server.base_url());
    let result = client
        .complete(CompletionRequest::new(CLAUDE_MODEL, "hello"))
        .await;

    assert!(matches!(
        result,
        Err(CompletionError::AuthenticationFailure(_))
    ));
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(429).json_body(json!({
            "type": "error",
            "error": {"type": "rate_limit_error", "message": "Number of requests exceeded"}
        }));
    });

    let client = AnthropicClient::new("key", server.base_url());
    let result = client
        .complete(CompletionRequest::new(CLAUDE_MODEL, "hello"))
        .await;

    match result {
        Err(CompletionError::RateLimited(detail)) => {
            assert!(detail.contains("Number of requests exceeded"));
        }
        other => panic!("Expected RateLimited, got {:?}", other),
    }
}

#[tokio::test]
async fn server_error_maps_to_unknown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(500).body("internal server error");
    });

    let client = AnthropicClient::new("key", server.base_url());
    let result = client
        .complete(CompletionRequest::new(CLAUDE_MODEL, "hello"))
        .await;

    match result {
        Err(CompletionError::Unknown(detail)) => {
            assert!(detail.contains("500"));
            assert!(detail.contains("internal server error"));
        }
        other => panic!("Expected Unknown, got {:?}", other),
    }
}

#[tokio::test]
async fn unparseable_body_maps_to_malformed_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200).body("not json at all");
    });

    let client = AnthropicClient::new("key", server.base_url());
    let result = client
        .complete(CompletionRequest::new(CLAUDE_MODEL, "hello"))
        .await;

    assert!(matches!(result, Err(CompletionError::MalformedResponse(_))));
}

#[tokio::test]
async fn empty_content_maps_to_malformed_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200).json_body(json!({
            "content": [],
            "usage": {"input_tokens": 5, "output_tokens": 0}
        }));
    });

    let client = AnthropicClient::new("key", server.base_url());
    let result = client
        .complete(CompletionRequest::new(CLAUDE_MODEL, "hello"))
        .await;

    match result {
        Err(CompletionError::MalformedResponse(detail)) => {
            assert!(detail.contains("no text content"));
        }
        other => panic!("Expected MalformedResponse, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Live API tests
// ---------------------------------------------------------------------------

fn get_test_api_key() -> String {
    std::env::var("ANTHROPIC_API_KEY")
        .expect("ANTHROPIC_API_KEY environment variable must be set for live tests")
}

#[tokio::test]
#[ignore] // Run with: cargo test --test anthropic_integration -- --ignored
async fn live_simple_completion() {
    let client = AnthropicClient::new(get_test_api_key(), ANTHROPIC_API_BASE);
    let request = CompletionRequest::new(CLAUDE_MODEL, "What is 2 + 2? Reply with just the number.")
        .with_max_tokens(10);

    let completion = client.complete(request).await;
    assert!(
        completion.is_ok(),
        "Completion failed: {:?}",
        completion.err()
    );

    let completion = completion.expect("Should have completion");
    assert!(
        completion.text.contains('4'),
        "Response should contain '4', got: {}",
        completion.text
    );
    assert!(completion.output_tokens > 0, "Should have token usage");
}

#[tokio::test]
#[ignore]
async fn live_invalid_key_is_authentication_failure() {
    let client = AnthropicClient::new("sk-ant-invalid-key", ANTHROPIC_API_BASE);
    let request = CompletionRequest::new(CLAUDE_MODEL, "hello").with_max_tokens(10);

    let result = client.complete(request).await;
    assert!(matches!(
        result,
        Err(CompletionError::AuthenticationFailure(_))
    ));
}
