//! Share-link configuration.

use serde::{Deserialize, Serialize};

/// Settings for building and presenting share links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharingConfig {
    /// Public origin that share URLs are rooted at (no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Capacity of the share event broadcast channel.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl SharingConfig {
    /// Base URL with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            event_capacity: default_event_capacity(),
        }
    }
}

fn default_base_url() -> String {
    "https://videovault.example".to_string()
}

fn default_event_capacity() -> usize {
    256
}
