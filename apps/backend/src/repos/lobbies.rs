//! Lobby storage collaborator.
//!
//! The aggregate is persisted and reloaded as an opaque whole. There is no
//! versioning: concurrent `update` calls for the same lobby overwrite each
//! other and the last write wins.

use async_trait::async_trait;

use crate::domain::Lobby;
use crate::errors::domain::DomainError;

#[async_trait]
pub trait LobbyRepo: Send + Sync {
    /// Insert a new lobby.
    async fn save(&self, lobby: &Lobby) -> Result<(), DomainError>;

    /// Load a lobby by access code; `NotFound(Lobby)` when none exists.
    async fn find_by_access_code(&self, access_code: &str) -> Result<Lobby, DomainError>;

    /// Upsert a lobby keyed by its id.
    async fn update(&self, lobby: &Lobby) -> Result<(), DomainError>;

    /// Number of stored lobbies.
    async fn count(&self) -> Result<usize, DomainError>;
}
