#[cfg(test)]
mod tests {
    use crate::ai_types::{ChatRequest, PromptMessage};
    use crate::client::{truncate, LlmClient};
    use crate::error::LlmError;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_request() -> ChatRequest {
        ChatRequest {
            model: "test-model".to_owned(),
            messages: vec![PromptMessage::system("You are terse."), PromptMessage::user("Hello")],
            max_tokens: Some(2048),
            temperature: Some(0.7),
        }
    }

    fn create_client(server: &MockServer) -> LlmClient {
        LlmClient::new("test-key".to_owned(), server.uri()).unwrap()
    }

    #[tokio::test]
    async fn test_sends_expected_request_body() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_json(serde_json::json!({
                "model": "test-model",
                "messages": [
                    {"role": "system", "content": "You are terse."},
                    {"role": "user", "content": "Hello"}
                ],
                "max_tokens": 2048,
                "temperature": 0.7
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "Hi."}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client.chat_completion(&create_test_request()).await.unwrap();
        assert_eq!(result.as_deref(), Some("Hi."));
    }

    #[tokio::test]
    async fn test_unparseable_settings_serialize_as_null() {
        let server = MockServer::start().await;
        let client = create_client(&server);
        let mut request = create_test_request();
        request.max_tokens = None;
        request.temperature = None;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_json(serde_json::json!({
                "model": "test-model",
                "messages": [
                    {"role": "system", "content": "You are terse."},
                    {"role": "user", "content": "Hello"}
                ],
                "max_tokens": null,
                "temperature": null
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "ok"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client.chat_completion(&request).await.unwrap();
        assert_eq!(result.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let server = MockServer::start().await;
        let client = LlmClient::new("test-key".to_owned(), format!("{}/", server.uri())).unwrap();

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "ok"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client.chat_completion(&create_test_request()).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_choices_yield_none() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let result = client.chat_completion(&create_test_request()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_null_content_yields_none() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": null}}]
            })))
            .mount(&server)
            .await;

        let result = client.chat_completion(&create_test_request()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_error_status_is_not_retried() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client.chat_completion(&create_test_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::HttpStatus { code: 503, .. }));
        assert!(err.to_string().contains("Service Unavailable"));
    }

    #[tokio::test]
    async fn test_auth_rejection() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Incorrect API key"))
            .mount(&server)
            .await;

        let err = client.chat_completion(&create_test_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::HttpStatus { code: 401, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = client.chat_completion(&create_test_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::JsonParse { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let client = LlmClient::new("test-key".to_owned(), "http://127.0.0.1:1".to_owned()).unwrap();

        let err = client.chat_completion(&create_test_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::HttpRequest(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = LlmClient::new("sk-secret".to_owned(), "http://localhost".to_owned()).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_truncate_unicode_boundary() {
        let s = "привет";
        assert!(truncate(s, 3).len() <= 3);
        assert_eq!(truncate("hello world", 5), "hello");
        assert_eq!(truncate("", 10), "");
    }
}
