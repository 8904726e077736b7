//! In-memory adapter for the lobby repository.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::Lobby;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::repos::lobbies::LobbyRepo;

/// `DashMap` implementation of LobbyRepo.
///
/// Lobbies are stored whole by id, with a secondary index from access code
/// to id. An access code belongs to the first lobby that claims it.
#[derive(Debug, Default)]
pub struct InMemoryLobbyRepo {
    lobbies: DashMap<String, Lobby>,
    by_code: DashMap<String, String>,
}

impl InMemoryLobbyRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `lobby`'s access code, or fail if another lobby holds it.
    fn claim_code(&self, lobby: &Lobby) -> Result<(), DomainError> {
        match self.by_code.entry(lobby.access_code().to_string()) {
            Entry::Occupied(held) if held.get() != lobby.id() => Err(DomainError::infra(
                InfraErrorKind::AccessCodeTaken,
                format!(
                    "access code {} already belongs to lobby {}",
                    lobby.access_code(),
                    held.get()
                ),
            )),
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(lobby.id().to_string());
                Ok(())
            }
        }
    }
}

#[async_trait]
impl LobbyRepo for InMemoryLobbyRepo {
    async fn save(&self, lobby: &Lobby) -> Result<(), DomainError> {
        if self.lobbies.contains_key(lobby.id()) {
            return Err(DomainError::infra(
                InfraErrorKind::Storage,
                format!("lobby {} already stored", lobby.id()),
            ));
        }
        self.claim_code(lobby)?;
        self.lobbies.insert(lobby.id().to_string(), lobby.clone());
        Ok(())
    }

    async fn find_by_access_code(&self, access_code: &str) -> Result<Lobby, DomainError> {
        let not_found = || {
            DomainError::not_found(
                NotFoundKind::Lobby,
                format!("no lobby with access code {access_code}"),
            )
        };
        let id = self
            .by_code
            .get(access_code)
            .map(|entry| entry.value().clone())
            .ok_or_else(not_found)?;
        let lobby = self
            .lobbies
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("access code {access_code} points at missing lobby {id}"),
                )
            })?;
        Ok(lobby)
    }

    async fn update(&self, lobby: &Lobby) -> Result<(), DomainError> {
        self.claim_code(lobby)?;
        self.lobbies.insert(lobby.id().to_string(), lobby.clone());
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.lobbies.len())
    }
}
