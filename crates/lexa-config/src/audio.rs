use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_player() -> String {
    "mpv".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// External command spawned with the audio URL as its argument.
    #[serde(default = "default_player")]
    pub player: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            player: default_player(),
        }
    }
}

impl AudioConfig {
    pub fn new() -> Self {
        let player = env::var("LEXA_AUDIO_PLAYER").unwrap_or_else(|_| default_player());

        Self {
            enabled: default_enabled(),
            player,
        }
    }
}
