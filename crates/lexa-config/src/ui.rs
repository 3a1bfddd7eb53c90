use lexa_types::FontChoice;
use serde::{Deserialize, Serialize};

fn default_fonts() -> Vec<FontChoice> {
    vec![
        FontChoice {
            name: "Sans Serif".to_string(),
            family: "sans-serif".to_string(),
        },
        FontChoice {
            name: "Serif".to_string(),
            family: "serif".to_string(),
        },
        FontChoice {
            name: "Monospace".to_string(),
            family: "monospace".to_string(),
        },
    ]
}

fn default_family() -> String {
    "sans-serif".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Font menu entries, in display order.
    #[serde(default = "default_fonts")]
    pub fonts: Vec<FontChoice>,
    /// Family applied when a menu entry carries none.
    #[serde(default = "default_family")]
    pub default_family: String,
    /// Disable styled output entirely.
    #[serde(default)]
    pub plain: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fonts: default_fonts(),
            default_family: default_family(),
            plain: false,
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
