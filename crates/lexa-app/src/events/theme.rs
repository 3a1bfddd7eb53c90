use kanal::AsyncSender;
use lexa_store::{PrefKey, PreferenceStore};
use lexa_types::{AppEvent, Theme};

use crate::state::AppState;

/// Flip dark/light, persist the new value, and tell the UI.
pub async fn handle_theme_toggle(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let current = state
        .prefs
        .get(PrefKey::Theme)
        .map(|v| Theme::parse(&v))
        .unwrap_or_default();

    let next = current.toggled();
    state.prefs.set(PrefKey::Theme, next.as_str());
    tracing::debug!("theme set to {}", next.as_str());

    app_to_ui_tx.send(AppEvent::ApplyTheme(next)).await?;
    Ok(())
}
