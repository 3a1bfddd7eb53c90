use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use lexa_core::surface::RenderSurface;
use lexa_core::workflow::SearchWorkflow;
use lexa_dict::{DictApiClient, DictionarySource};
use lexa_store::{PrefKey, PreferenceStore};
use lexa_types::{AppEvent, FontChoice, Theme, UiEvent};

use crate::bridge::EventSurface;
use crate::state::AppState;

pub mod font;
pub mod search;
pub mod theme;

use font::handle_font_select;
use search::handle_search;
use theme::handle_theme_toggle;

/// Backend main loop: restore persisted preferences, then drive the
/// search workflow from user events.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let client = {
        let config = state.config.read().await;
        DictApiClient::new(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_seconds),
        )?
    };

    let surface = EventSurface::new(app_to_ui_tx.clone());
    let mut workflow = SearchWorkflow::new(client, surface, state.prefs.clone());

    restore_on_load(&state, &app_to_ui_tx, &mut workflow).await?;

    loop {
        let event = ui_to_app_rx.recv().await?;

        if let AppEvent::UiEvent(UiEvent::Close) = event {
            tracing::info!("close requested");
            return Ok(());
        }

        handle_event(&state, &app_to_ui_tx, &mut workflow, event).await?;
    }
}

async fn handle_event<D, R>(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    workflow: &mut SearchWorkflow<D, R>,
    event: AppEvent,
) -> anyhow::Result<()>
where
    D: DictionarySource,
    R: RenderSurface,
{
    match event {
        AppEvent::UiEvent(UiEvent::Search(text)) => handle_search(workflow, &text).await,
        AppEvent::UiEvent(UiEvent::ToggleTheme) => handle_theme_toggle(state, app_to_ui_tx).await,
        AppEvent::UiEvent(UiEvent::SelectFont(name)) => {
            handle_font_select(state, app_to_ui_tx, &name).await
        }
        AppEvent::UiEvent(UiEvent::ListFonts) => {
            let fonts = state.config.read().await.ui.fonts.clone();
            app_to_ui_tx.send(AppEvent::ShowFonts(fonts)).await?;
            Ok(())
        }
        AppEvent::UiEvent(UiEvent::PlayAudio) => {
            // The UI holds the current result's audio binding.
            app_to_ui_tx.send(AppEvent::PlayAudio).await?;
            Ok(())
        }
        AppEvent::UiEvent(UiEvent::Close) => Ok(()),
        // Render events only travel app -> ui.
        _ => Ok(()),
    }
}

/// Apply persisted preferences once at startup: dark theme, font pair,
/// and the last successful search (which issues one network call).
pub async fn restore_on_load<D, R>(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    workflow: &mut SearchWorkflow<D, R>,
) -> anyhow::Result<()>
where
    D: DictionarySource,
    R: RenderSurface,
{
    if let Some(value) = state.prefs.get(PrefKey::Theme) {
        let theme = Theme::parse(&value);
        if theme == Theme::Dark {
            app_to_ui_tx.send(AppEvent::ApplyTheme(theme)).await?;
        }
    }

    let name = state.prefs.get(PrefKey::FontName);
    let family = state.prefs.get(PrefKey::FontFamily);
    if let (Some(name), Some(family)) = (name, family) {
        app_to_ui_tx
            .send(AppEvent::ApplyFont(FontChoice { name, family }))
            .await?;
    }

    workflow.restore_last_word().await
}
