use std::path::PathBuf;
use std::sync::Arc;

use lexa_config::Config;
use lexa_config::storage::StorageConfig;
use lexa_store::{FilePrefs, MemoryPrefs, PreferenceStore};
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub prefs: Arc<dyn PreferenceStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let prefs = open_prefs(&config.storage);
        Self::with_prefs(config, prefs)
    }

    pub fn with_prefs(config: Config, prefs: Arc<dyn PreferenceStore>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            prefs,
        }
    }
}

fn open_prefs(storage: &StorageConfig) -> Arc<dyn PreferenceStore> {
    if !storage.enabled {
        tracing::info!("preference persistence disabled");
        return Arc::new(MemoryPrefs::new());
    }

    let path = storage
        .path
        .as_ref()
        .map(PathBuf::from)
        .or_else(FilePrefs::default_path);

    match path {
        Some(path) => {
            tracing::debug!("preferences at {}", path.display());
            Arc::new(FilePrefs::open(path))
        }
        None => {
            tracing::warn!("no config directory available, preferences will not persist");
            Arc::new(MemoryPrefs::new())
        }
    }
}
