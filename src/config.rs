//! Console Configuration
//!
//! Settings baked in at build time. Trunk forwards the environment of the
//! build, so `STRUCTURE_CONSOLE_API_URL=https://api.example.org trunk build`
//! points the console at another backend.

/// Backend used when no URL is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// `localStorage` key the login screen writes the access token to
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// How long success messages stay visible
pub const STATUS_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// API root without trailing slash
    pub api_url: String,
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::with_api_url(option_env!("STRUCTURE_CONSOLE_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_api_url(url: &str) -> Self {
        let trimmed = url.trim().trim_end_matches('/');
        let api_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self { api_url: api_url.to_string() }
    }

    /// Join an endpoint path onto the API root
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}
