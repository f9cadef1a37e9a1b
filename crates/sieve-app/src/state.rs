use std::sync::{Arc, Mutex};

use sieve_config::Config;
use sieve_import::MemoryHistory;
use tokio::sync::RwLock;

use crate::profile::ProfileStore;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Lookup history shared with blocking import tasks
    pub history: Arc<Mutex<MemoryHistory>>,
    /// Where `config` was loaded from, re-read on reload
    pub profile: Option<(ProfileStore, String)>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            history: Arc::new(Mutex::new(MemoryHistory::new())),
            profile: None,
        }
    }

    pub fn with_profile(mut self, store: ProfileStore, name: impl Into<String>) -> Self {
        self.profile = Some((store, name.into()));
        self
    }

    /// Re-read the profile from disk. Without a profile the in-memory config is kept.
    pub async fn reload_profile(&self) -> anyhow::Result<()> {
        let Some((store, name)) = &self.profile else {
            return Ok(());
        };

        let config = store.load_user_profile(name)?;
        *self.config.write().await = config;
        tracing::info!("Reloaded profile '{}'", name);
        Ok(())
    }
}
