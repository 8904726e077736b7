//! Lobby orchestration: load, apply one state-machine step, persist, cache.
//!
//! Concurrent actions on the same lobby are not isolated from each other.
//! Each runs its own load/persist window and the last `update` wins.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::{Lobby, LobbyStatus, LobbyView, Profile};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::repos::LobbyRepo;
use crate::services::lobby_cache::LobbyViewCache;

/// Fresh lobbies tried before a taken access code is reported.
const CREATE_ATTEMPTS: usize = 3;

/// Lobby domain service.
#[derive(Clone)]
pub struct LobbyService {
    repo: Arc<dyn LobbyRepo>,
    cache: LobbyViewCache,
}

impl LobbyService {
    pub fn new(repo: Arc<dyn LobbyRepo>, cache: LobbyViewCache) -> Self {
        Self { repo, cache }
    }

    pub fn cache(&self) -> &LobbyViewCache {
        &self.cache
    }

    pub async fn lobby_count(&self) -> Result<usize, DomainError> {
        self.repo.count().await
    }

    pub async fn create_lobby(
        &self,
        master: Profile,
        name: &str,
        max_hard_skills: usize,
        max_soft_skills: usize,
    ) -> Result<LobbyView, DomainError> {
        let mut attempt = 1;
        let lobby = loop {
            let lobby = Lobby::new(master.clone(), name, max_hard_skills, max_soft_skills);
            match self.repo.save(&lobby).await {
                Ok(()) => break lobby,
                Err(DomainError::Infra(InfraErrorKind::AccessCodeTaken, detail))
                    if attempt < CREATE_ATTEMPTS =>
                {
                    warn!(attempt, %detail, "Access code taken, regenerating lobby");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        };

        info!(
            access_code = lobby.access_code(),
            max_hard_skills, max_soft_skills, "Lobby created"
        );
        Ok(self.cache_view(&lobby).await)
    }

    /// Cache first; a miss loads, derives and caches the view.
    pub async fn get_lobby(&self, access_code: &str) -> Result<LobbyView, DomainError> {
        if let Some(view) = self.cache.get(access_code).await {
            debug!(access_code, "Lobby view cache hit");
            return Ok(view);
        }

        let lobby = self.repo.find_by_access_code(access_code).await?;
        Ok(self.cache_view(&lobby).await)
    }

    pub async fn join_lobby(
        &self,
        access_code: &str,
        profile: Profile,
    ) -> Result<LobbyView, DomainError> {
        let role = profile.role;
        let profile_id = profile.id.clone();
        self.apply(access_code, "join", |lobby| lobby.join(profile))
            .await
            .inspect(|_| info!(access_code, %profile_id, ?role, "Profile joined lobby"))
    }

    /// Move to `CreatingTeam`, then advance the automatic phases in a
    /// detached task. The caller gets the `CreatingTeam` view back
    /// immediately; failures in the detached task only show up as a
    /// rollback to `Waiting` on a later read.
    pub async fn start_team_creation(&self, access_code: &str) -> Result<LobbyView, DomainError> {
        let view = self
            .apply(access_code, "start_team_creation", Lobby::start_team_creation)
            .await?;

        let service = self.clone();
        let code = access_code.to_string();
        tokio::spawn(async move { service.advance_team_creation(code).await });

        Ok(view)
    }

    /// Promote a player; once leaders suffice, team selection starts right away.
    pub async fn promote_leader(
        &self,
        access_code: &str,
        player_id: &str,
    ) -> Result<LobbyView, DomainError> {
        self.apply(access_code, "promote_leader", |lobby| {
            lobby.promote_leader(player_id)?;
            if lobby.status() == LobbyStatus::TeamsCreated {
                lobby.start_leader_team_selection()?;
            }
            Ok(())
        })
        .await
    }

    pub async fn select_team(
        &self,
        access_code: &str,
        leader_id: &str,
        team_id: usize,
    ) -> Result<LobbyView, DomainError> {
        self.apply(access_code, "select_team", |lobby| {
            lobby.select_team(leader_id, team_id)
        })
        .await
    }

    pub async fn select_player(
        &self,
        access_code: &str,
        leader_id: &str,
        player_id: &str,
    ) -> Result<LobbyView, DomainError> {
        self.apply(access_code, "select_player", |lobby| {
            lobby.select_player(leader_id, player_id)
        })
        .await
        .inspect_err(|e| {
            if matches!(e, DomainError::Validation(ValidationKind::NoEligibleLeader, _)) {
                error!(
                    access_code,
                    leader_id, "Draft has players left but no leader can pick"
                );
            }
        })
    }

    /// Load, run `step`, persist and cache. A failed step persists nothing.
    async fn apply<F>(
        &self,
        access_code: &str,
        action: &'static str,
        step: F,
    ) -> Result<LobbyView, DomainError>
    where
        F: FnOnce(&mut Lobby) -> Result<(), DomainError>,
    {
        let mut lobby = self.repo.find_by_access_code(access_code).await?;
        let from = lobby.status();

        if let Err(e) = step(&mut lobby) {
            debug!(access_code, action, status = %from, error = %e, "Lobby action rejected");
            return Err(e);
        }

        self.persist(&lobby, from).await
    }

    async fn persist(&self, lobby: &Lobby, from: LobbyStatus) -> Result<LobbyView, DomainError> {
        self.repo.update(lobby).await?;
        if lobby.status() != from {
            info!(
                access_code = lobby.access_code(),
                from = %from,
                to = %lobby.status(),
                "Lobby transition"
            );
        }
        Ok(self.cache_view(lobby).await)
    }

    async fn cache_view(&self, lobby: &Lobby) -> LobbyView {
        let view = LobbyView::from(lobby);
        self.cache.put(lobby.access_code(), view.clone()).await;
        view
    }

    /// Background continuation of `start_team_creation`.
    async fn advance_team_creation(self, access_code: String) {
        let mut lobby = match self.repo.find_by_access_code(&access_code).await {
            Ok(lobby) => lobby,
            Err(e) => {
                warn!(%access_code, error = %e, "Team creation could not reload lobby");
                return;
            }
        };

        let from = lobby.status();
        if let Err(e) = lobby.create_teams() {
            self.roll_back(lobby, "create_teams", e).await;
            return;
        }
        if let Err(e) = self.persist(&lobby, from).await {
            warn!(%access_code, error = %e, "Team creation could not persist teams");
            return;
        }

        if lobby.status() != LobbyStatus::TeamsCreated {
            return;
        }

        if let Err(e) = lobby.start_leader_team_selection() {
            self.roll_back(lobby, "start_leader_team_selection", e).await;
            return;
        }
        if let Err(e) = self.persist(&lobby, LobbyStatus::TeamsCreated).await {
            warn!(%access_code, error = %e, "Team creation could not persist team selection");
        }
    }

    async fn roll_back(&self, mut lobby: Lobby, step: &'static str, cause: DomainError) {
        let from = lobby.status();
        warn!(
            access_code = lobby.access_code(),
            step,
            error = %cause,
            "Automatic phase failed, rolling back to Waiting"
        );
        lobby.rollback_to_waiting();
        if let Err(e) = self.persist(&lobby, from).await {
            warn!(
                access_code = lobby.access_code(),
                error = %e,
                "Rollback could not be persisted"
            );
        }
    }
}
