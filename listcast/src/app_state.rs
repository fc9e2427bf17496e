use std::sync::Arc;

use crate::{Config, storage::PlaylistStore};

pub type AppStateRef = Arc<AppState>;
pub struct AppState {
    pub config: Arc<Config>,
    pub store: PlaylistStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let store = PlaylistStore::new(
            &config.playlists_dir,
            config.id_length.unwrap_or(5), // short ids by default
        );
        Self { config, store }
    }
}
