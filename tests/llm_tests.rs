//! Tests for the OpenAI-compatible LLM client
//!
//! These use wiremock to stand in for the Groq chat completions endpoint and
//! validate the request shape, response parsing and error handling, plus a
//! full agent run over HTTP.

use serde_json::json;
use std::sync::Arc;
use tool_router::llm::openai::OpenAIClient;
use tool_router::llm::{LLMClient, Provider};
use tool_router::types::AppError;
use tool_router::{ToolAgent, ToolRegistry};
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

/// Create a mock chat completion response
fn mock_completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
    })
}

fn client_for(server: &MockServer) -> OpenAIClient {
    OpenAIClient::new(
        "gsk_test".to_string(),
        format!("{}/openai/v1", server.uri()),
        "llama-3.3-70b-versatile".to_string(),
    )
    .unwrap()
}

// ============= Client Tests =============

#[tokio::test]
async fn test_generate_sends_single_user_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(header("authorization", "Bearer gsk_test"))
        .and(body_partial_json(json!({
            "model": "llama-3.3-70b-versatile",
            "messages": [{ "role": "user", "content": "What is 2+2?" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("4")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server).generate("What is 2+2?").await.unwrap();
    assert_eq!(reply, "4");
}

#[tokio::test]
async fn test_generate_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": {"message": "Invalid API Key"}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).generate("hi").await.unwrap_err();
    assert!(matches!(err, AppError::LLM(_)));
    assert!(err.to_string().contains("401"));
    assert!(err.to_string().contains("Invalid API Key"));
}

#[tokio::test]
async fn test_generate_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("hi").await.unwrap_err();
    assert!(err.to_string().contains("No response content"));
}

#[tokio::test]
async fn test_generate_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("hi").await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse response"));
}

#[tokio::test]
async fn test_provider_builds_working_client() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("pong")))
        .mount(&server)
        .await;

    let client = Provider::OpenAI {
        api_key: "sk-test".to_string(),
        api_base: server.uri(),
        model: "gpt-4o-mini".to_string(),
    }
    .create_client()
    .unwrap();

    assert_eq!(client.model_name(), "gpt-4o-mini");
    assert_eq!(client.generate("ping").await.unwrap(), "pong");
}

// ============= Agent over HTTP =============

#[tokio::test]
async fn test_agent_calculator_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(body_string_contains("If a tool is needed"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock_completion("TOOL: calculator\nINPUT: 12*8")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(body_string_contains("Tool result: 96"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(mock_completion("12 times 8 is 96.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let agent = ToolAgent::new(
        Arc::new(client_for(&server)),
        Arc::new(ToolRegistry::with_default_tools()),
    );

    let run = agent.run_traced("What is 12 * 8?").await.unwrap();
    assert_eq!(run.answer, "12 times 8 is 96.");
    assert_eq!(run.llm_calls, 2);
    assert_eq!(run.tool.unwrap().result, "96");
}
