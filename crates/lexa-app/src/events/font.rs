use kanal::AsyncSender;
use lexa_store::{PrefKey, PreferenceStore};
use lexa_types::AppEvent;

use crate::state::AppState;

/// Resolve a font menu selection by name, persist both fields, and
/// tell the UI. An unknown name just re-lists the menu.
pub async fn handle_font_select(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    name: &str,
) -> anyhow::Result<()> {
    let (choice, default_family) = {
        let config = state.config.read().await;
        (
            config
                .ui
                .fonts
                .iter()
                .find(|f| f.name.eq_ignore_ascii_case(name))
                .cloned(),
            config.ui.default_family.clone(),
        )
    };

    let Some(mut choice) = choice else {
        tracing::warn!("unknown font {name:?}");
        let fonts = state.config.read().await.ui.fonts.clone();
        app_to_ui_tx.send(AppEvent::ShowFonts(fonts)).await?;
        return Ok(());
    };

    // A menu entry without an explicit family falls back to the
    // configured default, set together and read together.
    if choice.family.is_empty() {
        choice.family = default_family;
    }

    state.prefs.set(PrefKey::FontName, &choice.name);
    state.prefs.set(PrefKey::FontFamily, &choice.family);

    app_to_ui_tx.send(AppEvent::ApplyFont(choice)).await?;
    Ok(())
}
