//! Client for the upstream chat completion API.

mod ai_types;
mod backend;
mod client;
#[cfg(test)]
mod client_tests;
mod error;

pub use ai_types::{ChatRequest, ChatResponse, Choice, PromptMessage, ResponseMessage};
pub use backend::CompletionBackend;
pub use client::{truncate, LlmClient};
pub use error::LlmError;
