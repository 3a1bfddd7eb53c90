use async_trait::async_trait;
use lexa_types::LookupView;

/// Rendering capability the search workflow drives.
///
/// The terminal UI implements this by forwarding events to its own
/// loop; tests substitute a recording fake.
#[async_trait]
pub trait RenderSurface: Send + Sync {
    async fn render_result(&self, view: LookupView) -> anyhow::Result<()>;

    /// Show the fixed "no definitions found" panel.
    async fn render_error(&self) -> anyhow::Result<()>;

    /// Toggle the inline empty-input indicator.
    async fn render_empty_input(&self, visible: bool) -> anyhow::Result<()>;

    /// Drop any previously rendered result.
    async fn clear_result(&self) -> anyhow::Result<()>;
}

/// Playback capability for pronunciation audio.
pub trait AudioSink: Send + Sync {
    /// Start playback of `url`. Failures are logged, not surfaced.
    fn play(&self, url: &str);
}
