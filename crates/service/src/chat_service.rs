use std::sync::Arc;

use chatdesk_core::{ChatMessage, NO_RESPONSE_PLACEHOLDER};
use chatdesk_llm::{ChatRequest, CompletionBackend, PromptMessage};
use chatdesk_storage::SettingsStore;

use crate::ServiceError;

/// Relays a single user message to the upstream completion API.
///
/// Model, token cap and temperature are read from the settings document on
/// every call, so settings updates take effect on the next message.
pub struct ChatService {
    settings: Arc<SettingsStore>,
    backend: Arc<dyn CompletionBackend>,
}

/// Builds the prompt sequence: the custom prompt as a system entry when it is
/// non-empty, then the user message.
#[must_use]
pub fn build_prompt(message: &str, custom_prompt: Option<&str>) -> Vec<PromptMessage> {
    let mut messages = Vec::with_capacity(2);
    if let Some(prompt) = custom_prompt.filter(|p| !p.is_empty()) {
        messages.push(PromptMessage::system(prompt));
    }
    messages.push(PromptMessage::user(message));
    messages
}

impl ChatService {
    #[must_use]
    pub fn new(settings: Arc<SettingsStore>, backend: Arc<dyn CompletionBackend>) -> Self {
        Self { settings, backend }
    }

    pub async fn relay(
        &self,
        message: &str,
        custom_prompt: Option<&str>,
    ) -> Result<ChatMessage, ServiceError> {
        tracing::debug!(
            message_len = message.len(),
            custom_prompt = custom_prompt.is_some_and(|p| !p.is_empty()),
            "chat message received"
        );

        let settings = self.settings.get().await;
        let request = ChatRequest {
            model: settings.chat_model(),
            messages: build_prompt(message, custom_prompt),
            max_tokens: settings.max_tokens(),
            temperature: settings.temperature(),
        };
        if request.max_tokens.is_none() || request.temperature.is_none() {
            tracing::warn!(
                max_tokens = ?settings.get("maxTokens"),
                temperature = ?settings.get("temperature"),
                "settings value is not numeric, sending null upstream"
            );
        }

        let content = self.backend.complete(&request).await.map_err(|e| {
            tracing::error!(error = %e, model = %request.model, "chat completion failed");
            ServiceError::Upstream(e)
        })?;

        let content =
            content.filter(|c| !c.is_empty()).unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_owned());
        Ok(ChatMessage::assistant(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chatdesk_core::Role;
    use chatdesk_llm::LlmError;
    use serde_json::{json, Map, Value};
    use std::sync::Mutex;
    use tempfile::TempDir;

    enum Reply {
        Text(&'static str),
        Empty,
        Fail,
    }

    struct FakeBackend {
        reply: Reply,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl FakeBackend {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self { reply, seen: Mutex::new(Vec::new()) })
        }

        fn requests(&self) -> Vec<ChatRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionBackend for FakeBackend {
        async fn complete(&self, request: &ChatRequest) -> Result<Option<String>, LlmError> {
            self.seen.lock().unwrap().push(request.clone());
            match self.reply {
                Reply::Text(t) => Ok(Some(t.to_owned())),
                Reply::Empty => Ok(None),
                Reply::Fail => Err(LlmError::HttpStatus { code: 429, body: "slow down".to_owned() }),
            }
        }
    }

    async fn setup(reply: Reply) -> (ChatService, Arc<FakeBackend>, Arc<SettingsStore>, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(SettingsStore::initialize(dir.path().join("settings.json")).await.unwrap());
        let backend = FakeBackend::new(reply);
        let service = ChatService::new(Arc::clone(&store), backend.clone());
        (service, backend, store, dir)
    }

    fn partial(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("partial settings must be a JSON object"),
        }
    }

    #[test]
    fn test_prompt_without_custom_prompt() {
        let prompt = build_prompt("Hello", None);
        assert_eq!(prompt, vec![PromptMessage::user("Hello")]);
    }

    #[test]
    fn test_prompt_with_custom_prompt() {
        let prompt = build_prompt("Hello", Some("You are terse."));
        assert_eq!(prompt.len(), 2);
        assert_eq!(prompt[0].role, Role::System);
        assert_eq!(prompt[0].content, "You are terse.");
        assert_eq!(prompt[1].role, Role::User);
        assert_eq!(prompt[1].content, "Hello");
    }

    #[test]
    fn test_empty_custom_prompt_is_skipped() {
        assert_eq!(build_prompt("Hello", Some("")), vec![PromptMessage::user("Hello")]);
    }

    #[tokio::test]
    async fn test_relay_uses_current_settings() {
        let (service, backend, _store, _dir) = setup(Reply::Text("Hi!")).await;
        let reply = service.relay("Hello", None).await.unwrap();

        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "Hi!");
        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gpt-3.5-turbo");
        assert_eq!(requests[0].max_tokens, Some(2048));
        assert_eq!(requests[0].temperature, Some(0.7));
        assert_eq!(requests[0].messages, vec![PromptMessage::user("Hello")]);
    }

    #[tokio::test]
    async fn test_relay_picks_up_settings_update() {
        let (service, backend, store, _dir) = setup(Reply::Text("ok")).await;
        store
            .update(partial(json!({"chatModel": "gpt-4o", "maxTokens": "256", "temperature": "0.1"})))
            .await
            .unwrap();

        service.relay("Hello", Some("You are terse.")).await.unwrap();
        let request = &backend.requests()[0];
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.max_tokens, Some(256));
        assert_eq!(request.temperature, Some(0.1));
        assert_eq!(request.messages[0], PromptMessage::system("You are terse."));
    }

    #[tokio::test]
    async fn test_relay_forwards_malformed_numbers_as_none() {
        let (service, backend, store, _dir) = setup(Reply::Text("ok")).await;
        store.update(partial(json!({"maxTokens": "lots", "temperature": "warm"}))).await.unwrap();

        service.relay("Hello", None).await.unwrap();
        let request = &backend.requests()[0];
        assert_eq!(request.max_tokens, None);
        assert_eq!(request.temperature, None);
    }

    #[tokio::test]
    async fn test_inert_settings_have_no_effect() {
        let (service, backend, store, _dir) = setup(Reply::Text("ok")).await;
        service.relay("Hello", None).await.unwrap();
        store
            .update(partial(json!({
                "timeout": "0",
                "retryAttempts": "0",
                "rateLimit": "0",
                "maxConcurrentRequests": "0",
                "defaultPrompt": "Always answer in French."
            })))
            .await
            .unwrap();
        service.relay("Hello", None).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    #[tokio::test]
    async fn test_relay_placeholder_when_no_completion() {
        let (service, _backend, _store, _dir) = setup(Reply::Empty).await;
        let reply = service.relay("Hello", None).await.unwrap();
        assert_eq!(reply.content, "No response generated");
    }

    #[tokio::test]
    async fn test_relay_placeholder_when_completion_is_empty() {
        let (service, _backend, _store, _dir) = setup(Reply::Text("")).await;
        let reply = service.relay("Hello", None).await.unwrap();
        assert_eq!(reply.content, "No response generated");
    }

    #[tokio::test]
    async fn test_relay_upstream_failure() {
        let (service, backend, _store, _dir) = setup(Reply::Fail).await;
        let err = service.relay("Hello", None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Upstream(_)));
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_reply_id_is_numeric() {
        let (service, _backend, _store, _dir) = setup(Reply::Text("ok")).await;
        let reply = service.relay("Hello", None).await.unwrap();
        assert!(reply.id.parse::<i64>().is_ok());
    }
}
