use aigen::GenerativeAi;
use aigen::providers::gemini::{COMMUNICATION_FALLBACK, GeminiProvider, MALFORMED_REPLY_FALLBACK};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

fn provider_for(server: &MockServer) -> GeminiProvider {
    GeminiProvider::with_endpoint(server.uri(), "test-key".to_string())
}

#[tokio::test]
async fn returns_first_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_json(json!({
            "contents": [{"parts": [{"text": "Summarize\nThe sky is blue.\n"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "It is blue."}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let answer = provider
        .generate_content("Summarize", "The sky is blue.")
        .await;

    assert_eq!(answer, "It is blue.");
}

#[tokio::test]
async fn only_first_candidate_and_part_are_read() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other candidate"}]}}
            ]
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let answer = provider.generate_content("Pick one", "anything").await;

    assert_eq!(answer, "first");
}

#[tokio::test]
async fn empty_inputs_still_build_a_single_part_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_json(json!({
            "contents": [{"parts": [{"text": "\n\n"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let answer = provider.generate_content("", "").await;

    assert_eq!(answer, "ok");
}

#[tokio::test]
async fn server_error_yields_communication_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let answer = provider
        .generate_content("Summarize", "The sky is blue.")
        .await;

    assert_eq!(answer, COMMUNICATION_FALLBACK);
}

#[tokio::test]
async fn internal_error_yields_communication_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let answer = provider.generate_content("a", "b").await;

    assert_eq!(answer, COMMUNICATION_FALLBACK);
}

#[tokio::test]
async fn connection_refused_yields_communication_fallback() {
    // Nothing listens on this port.
    let provider = GeminiProvider::with_endpoint(
        "http://127.0.0.1:9".to_string(),
        "test-key".to_string(),
    );

    let answer = provider.generate_content("a", "b").await;

    assert_eq!(answer, COMMUNICATION_FALLBACK);
}

#[tokio::test]
async fn empty_candidate_list_yields_malformed_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let answer = provider.generate_content("a", "b").await;

    assert_eq!(answer, MALFORMED_REPLY_FALLBACK);
}

#[tokio::test]
async fn empty_parts_list_yields_malformed_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": []}}]
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let answer = provider.generate_content("a", "b").await;

    assert_eq!(answer, MALFORMED_REPLY_FALLBACK);
}

#[tokio::test]
async fn missing_candidates_key_yields_malformed_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let answer = provider.generate_content("a", "b").await;

    assert_eq!(answer, MALFORMED_REPLY_FALLBACK);
}

#[tokio::test]
async fn non_json_body_yields_malformed_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let answer = provider.generate_content("a", "b").await;

    assert_eq!(answer, MALFORMED_REPLY_FALLBACK);
}
