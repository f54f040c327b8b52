//! HTTP integration tests for the chat client using wiremock

use ai_chat::{ChatCompletion, ChatConfig, ChatError, ChatRequest, OpenAiChatClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> ChatConfig {
    ChatConfig {
        api_key: Some("test-key".to_string()),
        base_url: base_url.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn complete_parses_a_successful_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "gpt-5",
            "choices": [
                {"message": {"role": "assistant", "content": "  Hello there!  "}}
            ],
            "usage": {"prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new(test_config(&server.uri())).unwrap();
    let reply = client
        .complete(ChatRequest::with_system("You are a partner", "Hi"))
        .await
        .unwrap();

    assert_eq!(reply.content, "Hello there!");
    assert_eq!(reply.model, "gpt-5");
    assert_eq!(reply.usage.unwrap().total_tokens, 25);
}

#[tokio::test]
async fn complete_sends_the_configured_model_and_temperature() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "gpt-5-mini",
            "temperature": 0.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "gpt-5-mini",
            "choices": [{"message": {"role": "assistant", "content": "ok"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new(test_config(&server.uri())).unwrap();
    let request = ChatRequest::with_system("s", "u")
        .with_model("gpt-5-mini")
        .with_temperature(0.0);

    let reply = client.complete(request).await.unwrap();
    assert_eq!(reply.content, "ok");
}

#[tokio::test]
async fn rate_limit_code_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "Too many requests", "code": "rate_limit_exceeded"}
        })))
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new(test_config(&server.uri())).unwrap();
    let err = client
        .complete(ChatRequest::with_system("s", "u"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::RateLimited));
}

#[tokio::test]
async fn unknown_model_maps_to_model_not_available() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"message": "No such model", "code": "model_not_found"}
        })))
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new(test_config(&server.uri())).unwrap();
    let err = client
        .complete(ChatRequest::with_system("s", "u").with_model("missing-model"))
        .await
        .unwrap_err();

    match err {
        ChatError::ModelNotAvailable(model) => assert_eq!(model, "missing-model"),
        other => unreachable!("Expected ModelNotAvailable, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_without_api_payload_maps_to_completion_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new(test_config(&server.uri())).unwrap();
    let err = client
        .complete(ChatRequest::with_system("s", "u"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::CompletionFailed(_)));
}

#[tokio::test]
async fn empty_choices_map_to_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "gpt-5",
            "choices": []
        })))
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new(test_config(&server.uri())).unwrap();
    let err = client
        .complete(ChatRequest::with_system("s", "u"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::InvalidResponse(_)));
}
