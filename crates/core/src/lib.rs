//! Core types for chatdesk
//!
//! This crate contains domain types shared across all other crates.

pub mod constants;
mod env_config;
mod error;
mod message;
mod numeric;
mod settings;
mod token;
mod user;

pub use constants::*;
pub use env_config::{env_list_with_default, env_parse_with_default};
pub use error::{CoreError, Result};
pub use message::{ChatMessage, Role};
pub use numeric::{parse_float_prefix, parse_int_prefix};
pub use settings::SettingsDocument;
pub use token::AuthToken;
pub use user::{authenticate, find_user, Account, User, UserRole, ACCOUNTS};
