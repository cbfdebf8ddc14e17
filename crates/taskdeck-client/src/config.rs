//! Client Configuration

use std::env;

/// Environment variable naming the task service base URL
pub const API_URL_ENV: &str = "TASKDECK_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the base URL: runtime env, then the value baked in at
    /// build time (the only source a wasm build has), then the default.
    pub fn from_env() -> Self {
        let url = env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| option_env!("TASKDECK_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an absolute API path (`/api/...`) onto the base URL
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_normalized() {
        let config = ClientConfig::new("https://tasks.example.com//");
        assert_eq!(config.base_url(), "https://tasks.example.com");
        assert_eq!(config.url("/api/tasks"), "https://tasks.example.com/api/tasks");
        assert_eq!(config.url("api/tasks"), "https://tasks.example.com/api/tasks");
    }

    #[test]
    fn test_default_points_at_local_service() {
        assert_eq!(ClientConfig::default().base_url(), DEFAULT_API_URL);
    }
}
