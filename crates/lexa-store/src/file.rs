use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::{PrefKey, PreferenceStore};

/// JSON-file-backed preference store.
///
/// The whole file is read once at open and rewritten on every set.
/// When the file cannot be read or written the store keeps working
/// in memory for the rest of the run.
pub struct FilePrefs {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FilePrefs {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed preference file {}: {e}", path.display());
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!("preference file {} unreadable: {e}", path.display());
                HashMap::new()
            }
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    /// Default location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "lexa")
            .map(|dirs| dirs.config_dir().join("prefs.json"))
    }

    fn flush(&self, values: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!("cannot create preference dir {}: {e}", parent.display());
                return;
            }
        }

        match serde_json::to_string_pretty(values) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.path, data) {
                    tracing::warn!("preference write to {} failed: {e}", self.path.display());
                }
            }
            Err(e) => tracing::warn!("preference serialization failed: {e}"),
        }
    }
}

impl PreferenceStore for FilePrefs {
    fn get(&self, key: PrefKey) -> Option<String> {
        let values = self.values.lock().ok()?;
        values.get(key.as_str()).cloned()
    }

    fn set(&self, key: PrefKey, value: &str) {
        let Ok(mut values) = self.values.lock() else {
            return;
        };
        values.insert(key.as_str().to_string(), value.to_string());
        self.flush(&values);
    }
}
