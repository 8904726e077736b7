use std::sync::Arc;

use tracing::info;

use crate::adapters::InMemoryLobbyRepo;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::repos::LobbyRepo;
use crate::services::{LobbyService, LobbyViewCache};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: AppConfig,
    repo: Option<Arc<dyn LobbyRepo>>,
    sweeper: bool,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            repo: None,
            sweeper: true,
        }
    }
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_repo(mut self, repo: Arc<dyn LobbyRepo>) -> Self {
        self.repo = Some(repo);
        self
    }
    /// Skip the periodic cache sweep task.
    pub fn without_sweeper(mut self) -> Self {
        self.sweeper = false;
        self
    }

    /// Must be awaited inside a Tokio runtime when the sweeper is enabled.
    pub async fn build(self) -> Result<AppState, AppError> {
        if self.config.cache.sweep_interval.is_zero() {
            return Err(AppError::config("cache sweep interval must be non-zero"));
        }

        let repo = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryLobbyRepo::new()) as Arc<dyn LobbyRepo>);
        let cache = LobbyViewCache::new(&self.config.cache);
        if self.sweeper {
            cache.spawn_sweeper(self.config.cache.sweep_interval);
        }

        info!(
            ttl_secs = self.config.cache.ttl.as_secs(),
            sweep_secs = self.config.cache.sweep_interval.as_secs(),
            max_entries = self.config.cache.max_entries,
            "Lobby view cache ready"
        );

        Ok(AppState::new(LobbyService::new(repo, cache), self.config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
