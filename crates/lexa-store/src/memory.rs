use std::collections::HashMap;
use std::sync::Mutex;

use crate::{PrefKey, PreferenceStore};

/// In-memory store for tests and for runs with persistence disabled.
#[derive(Default)]
pub struct MemoryPrefs {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: PrefKey) -> Option<String> {
        let values = self.values.lock().ok()?;
        values.get(key.as_str()).cloned()
    }

    fn set(&self, key: PrefKey, value: &str) {
        let Ok(mut values) = self.values.lock() else {
            return;
        };
        values.insert(key.as_str().to_string(), value.to_string());
    }
}
