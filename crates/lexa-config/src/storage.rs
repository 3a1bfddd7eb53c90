use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Preference file path; the platform config dir when unset.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: None,
        }
    }
}

impl StorageConfig {
    pub fn new() -> Self {
        let path = env::var("LEXA_PREFS_PATH").ok();

        Self {
            enabled: default_enabled(),
            path,
        }
    }
}
