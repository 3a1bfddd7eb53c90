use crate::prefs::{FontChoice, Theme};
use crate::view::LookupView;

/// Events flowing between the backend loop and the UI loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    ShowResult(LookupView),
    /// Fixed "no definitions found" panel; causes are not distinguished.
    ShowLookupError,
    ShowEmptyInputError(bool),
    ClearResult,
    ApplyTheme(Theme),
    ApplyFont(FontChoice),
    ShowFonts(Vec<FontChoice>),
    PlayAudio,
}

/// User-originated events from the input reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Search(String),
    ToggleTheme,
    SelectFont(String),
    ListFonts,
    PlayAudio,
    Close,
}
