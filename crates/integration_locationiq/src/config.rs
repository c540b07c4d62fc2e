//! LocationIQ service configuration

use serde::{Deserialize, Serialize};

/// Default host for the LocationIQ API
pub const DEFAULT_BASE_URL: &str = "https://api.locationiq.com/v1";

/// Configuration for the LocationIQ client
///
/// The API key is a bearer credential and must be non-empty; a client cannot
/// be constructed from an invalid configuration. The request timeout is a
/// fixed transport constant and deliberately not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationIqConfig {
    /// LocationIQ API key (sent as the `key` query parameter)
    pub api_key: String,

    /// Base URL for the API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for LocationIqConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl LocationIqConfig {
    /// Create a configuration with the given API key and the default host
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self::new("pk.test")
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key or base URL is empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        Ok(())
    }
}
