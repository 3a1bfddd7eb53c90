pub mod entry;
pub mod events;
pub mod prefs;
pub mod view;

pub use entry::{Definition, Meaning, PhoneticEntry, WordEntry};
pub use events::{AppEvent, UiEvent};
pub use prefs::{FontChoice, Theme};
pub use view::{DefinitionView, LookupView, MeaningView};
