//! Application Configuration
//!
//! Configuration for the news proxy.

use std::fmt;
use std::time::Duration;

/// Provider top-headlines endpoint
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/top-headlines";

/// News proxy configuration
#[derive(Clone)]
pub struct NewsConfig {
    /// Provider API key; requests are refused without one
    pub api_key: Option<String>,
    /// Top-headlines endpoint
    pub base_url: String,
    /// Articles requested per call (40)
    pub page_size: u32,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 40,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl NewsConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Configured key, treating an empty string as missing
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

impl fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NewsConfig::default();
        assert_eq!(config.page_size, 40);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_blank_key_is_missing() {
        assert!(NewsConfig::with_api_key("  ").api_key().is_none());
        assert_eq!(NewsConfig::with_api_key("abc").api_key(), Some("abc"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let output = format!("{:?}", NewsConfig::with_api_key("very-secret-key"));
        assert!(!output.contains("very-secret-key"));
    }
}
