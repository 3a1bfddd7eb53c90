use std::process::{Command, Stdio};

use lexa_config::audio::AudioConfig;
use lexa_core::surface::AudioSink;

/// Plays pronunciation audio by spawning the configured player.
pub struct CommandAudioSink {
    config: AudioConfig,
}

impl CommandAudioSink {
    pub fn new(config: AudioConfig) -> Self {
        Self { config }
    }
}

impl AudioSink for CommandAudioSink {
    fn play(&self, url: &str) {
        if !self.config.enabled {
            tracing::debug!("audio playback disabled");
            return;
        }

        match Command::new(&self.config.player)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(_) => tracing::debug!("started {} for {url}", self.config.player),
            Err(e) => tracing::warn!("failed to start {}: {e}", self.config.player),
        }
    }
}
