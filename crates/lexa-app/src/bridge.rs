use async_trait::async_trait;
use kanal::AsyncSender;
use lexa_core::surface::RenderSurface;
use lexa_types::{AppEvent, LookupView};

/// Render surface that forwards workflow output to the UI loop.
///
/// Keeps the workflow ignorant of the terminal: everything it renders
/// travels as events over the app-to-ui channel.
pub struct EventSurface {
    tx: AsyncSender<AppEvent>,
}

impl EventSurface {
    pub fn new(tx: AsyncSender<AppEvent>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl RenderSurface for EventSurface {
    async fn render_result(&self, view: LookupView) -> anyhow::Result<()> {
        self.tx.send(AppEvent::ShowResult(view)).await?;
        Ok(())
    }

    async fn render_error(&self) -> anyhow::Result<()> {
        self.tx.send(AppEvent::ShowLookupError).await?;
        Ok(())
    }

    async fn render_empty_input(&self, visible: bool) -> anyhow::Result<()> {
        self.tx.send(AppEvent::ShowEmptyInputError(visible)).await?;
        Ok(())
    }

    async fn clear_result(&self) -> anyhow::Result<()> {
        self.tx.send(AppEvent::ClearResult).await?;
        Ok(())
    }
}
