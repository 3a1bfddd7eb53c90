use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::audio::AudioConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;

pub mod api;
pub mod audio;
pub mod storage;
pub mod ui;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub audio: AudioConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Build from environment variables, falling back to defaults.
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            ui: UiConfig::new(),
            audio: AudioConfig::new(),
            storage: StorageConfig::new(),
        }
    }

    /// Load a config profile from a JSON file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}
