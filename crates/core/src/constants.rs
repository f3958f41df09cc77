//! Shared constants for chatdesk.
//!
//! Centralizes defaults that would otherwise be duplicated across crates.

/// Default listening port for the HTTP server.
pub const DEFAULT_PORT: u16 = 3001;

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default settings file, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Default base URL of the upstream completion API.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.openai.com";

/// Browser origins allowed by CORS when none are configured.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:5174"];

/// Reply content used when the upstream returns no completion text.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response generated";

/// Age after which an auth token is considered expired.
pub const TOKEN_TTL_HOURS: i64 = 24;
