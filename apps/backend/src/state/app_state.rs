use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::LobbyService;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Lobby orchestration service (owns the repo and the view cache)
    pub service: Arc<LobbyService>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(service: LobbyService, config: AppConfig) -> Self {
        Self {
            service: Arc::new(service),
            config,
        }
    }

    pub fn service(&self) -> &LobbyService {
        &self.service
    }
}
