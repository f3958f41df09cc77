//! Service layer for chatdesk
//!
//! Centralizes business logic between HTTP handlers and storage/llm.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod auth_service;
mod chat_service;
mod error;
mod settings_service;

pub use auth_service::{AuthService, LoginResponse};
pub use chat_service::{build_prompt, ChatService};
pub use error::ServiceError;
pub use settings_service::SettingsService;
