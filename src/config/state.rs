// Application state module
// Immutable configuration plus the asset store shared by every request

use std::sync::Arc;

use super::types::Config;
use crate::assets::{AssetStore, DirAssetStore};

/// Application state
pub struct AppState {
    pub config: Config,
    pub assets: Arc<dyn AssetStore>,
}

impl AppState {
    pub fn new(config: Config, assets: Arc<dyn AssetStore>) -> Self {
        Self { config, assets }
    }

    /// State serving assets from `content.assets_dir`
    pub fn from_config(config: Config) -> Self {
        let store = DirAssetStore::new(&config.content.assets_dir);
        Self::new(config, Arc::new(store))
    }

    pub fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
