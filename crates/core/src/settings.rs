//! The process-wide settings document.
//!
//! Stored as a free-form JSON object: updates are shallow merges that may add
//! unknown keys or change value types, and nothing is validated on write.
//! Typed accessors exist only for the fields the chat relay reads.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::numeric::{parse_float_prefix, parse_int_prefix};

pub const CHAT_MODEL: &str = "chatModel";
pub const MAX_TOKENS: &str = "maxTokens";
pub const TEMPERATURE: &str = "temperature";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsDocument(Map<String, Value>);

impl Default for SettingsDocument {
    fn default() -> Self {
        let defaults = json!({
            // AI
            "chatModel": "gpt-3.5-turbo",
            "maxTokens": "2048",
            "temperature": "0.7",
            "defaultPrompt": "",

            // System
            "theme": "dark",
            "language": "pl",
            "timezone": "Europe/Warsaw",
            "dateFormat": "DD/MM/YYYY",

            // Security
            "sessionTimeout": "30",
            "maxLoginAttempts": "5",
            "passwordPolicy": "strong",
            "twoFactorAuth": false,

            // API
            "rateLimit": "100",
            "maxConcurrentRequests": "10",
            "timeout": "30",
            "retryAttempts": "3",

            // Storage
            "maxUploadSize": "10",
            "allowedFileTypes": ".pdf,.doc,.txt",
            "storageQuota": "5",
            "compressionEnabled": true,

            // Notifications
            "emailNotifications": true,
            "errorAlerts": true,
            "usageAlerts": true,
            "updateNotifications": true,
        });
        match defaults {
            Value::Object(map) => Self(map),
            _ => Self(Map::new()),
        }
    }
}

impl SettingsDocument {
    /// Shallow-merge `partial` into this document.
    ///
    /// Keys present in `partial` replace same-named keys wholesale (nested
    /// objects are not merged); keys not yet present are added.
    pub fn merge(&mut self, partial: Map<String, Value>) {
        for (key, value) in partial {
            self.0.insert(key, value);
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Model identifier passed to the upstream completion API.
    ///
    /// Non-string values are rendered as their JSON text; a missing key
    /// yields an empty string and the upstream decides what that means.
    #[must_use]
    pub fn chat_model(&self) -> String {
        match self.0.get(CHAT_MODEL) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Completion length cap, or `None` when the stored value has no integer prefix.
    #[must_use]
    pub fn max_tokens(&self) -> Option<i64> {
        match self.0.get(MAX_TOKENS)? {
            Value::String(s) => parse_int_prefix(s),
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            _ => None,
        }
    }

    /// Sampling temperature, or `None` when the stored value is not numeric.
    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        match self.0.get(TEMPERATURE)? {
            Value::String(s) => parse_float_prefix(s),
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}
