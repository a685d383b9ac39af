//! API configuration
//!
//! Resolves the base URL of the remote person API once at startup.

/// Environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "ROLLCALL_API_URL";

/// Base URL used when no override is present (local development backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Remote API configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Read the configuration from the environment, falling back to the
    /// local-development default when the variable is unset or empty.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(API_URL_VAR).ok())
    }

    fn from_override(value: Option<String>) -> Self {
        let base_url = match value {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_API_URL.to_string(),
        };
        // Trim trailing slashes so endpoint paths can always start with one
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
