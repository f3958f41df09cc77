use async_trait::async_trait;

use crate::ai_types::ChatRequest;
use crate::error::LlmError;

/// Something that can answer a chat completion request.
///
/// `Ok(None)` means the upstream answered but produced no completion text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<Option<String>, LlmError>;
}
