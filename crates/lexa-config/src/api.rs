use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the search word is appended to as a path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("LEXA_API_URL").unwrap_or_else(|_| default_base_url());

        let timeout_seconds = env::var("LEXA_API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            base_url,
            timeout_seconds,
        }
    }
}
