//! The lobby aggregate and its team-formation state machine.
//!
//! Phases run `Waiting -> CreatingTeam -> [LeaderElection ->] TeamsCreated
//! -> LeaderTeamSelect -> PlayerSelect -> ReadyToStart`. Every operation
//! validates before it mutates, so a returned error leaves the aggregate
//! exactly as it was.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::choose_control::ChooseControl;
use crate::domain::priority::assign_priorities;
use crate::domain::profile::{Profile, Role, TurnKey, BEFORE_FIRST_TURN};
use crate::domain::team::Team;
use crate::errors::domain::{DomainError, ValidationKind};

/// Length of the public access code cut from the lobby id.
pub const ACCESS_CODE_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LobbyStatus {
    Waiting,
    CreatingTeam,
    LeaderElection,
    TeamsCreated,
    LeaderTeamSelect,
    PlayerSelect,
    ReadyToStart,
}

impl LobbyStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::CreatingTeam => "CreatingTeam",
            Self::LeaderElection => "LeaderElection",
            Self::TeamsCreated => "TeamsCreated",
            Self::LeaderTeamSelect => "LeaderTeamSelect",
            Self::PlayerSelect => "PlayerSelect",
            Self::ReadyToStart => "ReadyToStart",
        }
    }
}

impl fmt::Display for LobbyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lobby {
    id: String,
    access_code: String,
    master: Profile,
    name: String,
    max_hard_skills: usize,
    max_soft_skills: usize,
    players: Vec<Profile>,
    mentors: Vec<Profile>,
    teams: Vec<Team>,
    status: LobbyStatus,
    choose_control: Option<ChooseControl>,
}

impl Lobby {
    /// Panics if `master` does not hold the `Master` role.
    pub fn new(
        master: Profile,
        name: impl Into<String>,
        max_hard_skills: usize,
        max_soft_skills: usize,
    ) -> Self {
        assert!(
            master.role == Role::Master,
            "lobby owner {} has role {:?}, expected Master",
            master.id,
            master.role
        );
        let id = Uuid::new_v4().to_string();
        let access_code = id[..ACCESS_CODE_LEN].to_string();
        Self {
            id,
            access_code,
            master,
            name: name.into(),
            max_hard_skills,
            max_soft_skills,
            players: Vec::new(),
            mentors: Vec::new(),
            teams: Vec::new(),
            status: LobbyStatus::Waiting,
            choose_control: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_access_code(mut self, access_code: &str) -> Self {
        self.access_code = access_code.to_string();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn access_code(&self) -> &str {
        &self.access_code
    }
    pub fn master(&self) -> &Profile {
        &self.master
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn max_hard_skills(&self) -> usize {
        self.max_hard_skills
    }
    pub fn max_soft_skills(&self) -> usize {
        self.max_soft_skills
    }
    pub fn players(&self) -> &[Profile] {
        &self.players
    }
    pub fn mentors(&self) -> &[Profile] {
        &self.mentors
    }
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }
    pub fn status(&self) -> LobbyStatus {
        self.status
    }
    pub fn choose_control(&self) -> Option<&ChooseControl> {
        self.choose_control.as_ref()
    }

    fn expect_status(&self, expected: LobbyStatus) -> Result<(), DomainError> {
        if self.status != expected {
            return Err(DomainError::invalid_status(expected, self.status));
        }
        Ok(())
    }

    fn player(&self, id: &str) -> Option<&Profile> {
        self.players.iter().find(|p| p.id == id)
    }

    fn expect_turn(&self, actor_id: &str) -> Result<(), DomainError> {
        match &self.choose_control {
            Some(control) if control.choosing_now().id == actor_id => Ok(()),
            _ => Err(DomainError::validation(
                ValidationKind::NotYourTurn,
                format!("it is not the turn of {actor_id}"),
            )),
        }
    }

    /// Mentors are always accepted; anyone else is checked against the
    /// skill ceilings and stamped with the join time.
    pub fn join(&mut self, mut profile: Profile) -> Result<(), DomainError> {
        self.expect_status(LobbyStatus::Waiting)?;

        if profile.role == Role::Mentor {
            self.mentors.push(profile);
            return Ok(());
        }

        if profile.hard_skills.len() > self.max_hard_skills
            || profile.soft_skills.len() > self.max_soft_skills
        {
            return Err(DomainError::validation(
                ValidationKind::TooManySkills,
                format!(
                    "profile has {} hard / {} soft skills, lobby allows {} / {}",
                    profile.hard_skills.len(),
                    profile.soft_skills.len(),
                    self.max_hard_skills,
                    self.max_soft_skills
                ),
            ));
        }

        profile.join();
        self.players.push(profile);
        Ok(())
    }

    pub fn start_team_creation(&mut self) -> Result<(), DomainError> {
        self.expect_status(LobbyStatus::Waiting)?;

        if self.players.len() < 2 {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers,
                format!("{} players joined, at least 2 required", self.players.len()),
            ));
        }
        if self.mentors.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughMentors,
                "at least one mentor required",
            ));
        }

        self.status = LobbyStatus::CreatingTeam;
        Ok(())
    }

    /// Either forms one team per mentor, or hands the master a
    /// `PromoteLeader` turn when there are fewer leaders than mentors.
    pub fn create_teams(&mut self) -> Result<(), DomainError> {
        self.expect_status(LobbyStatus::CreatingTeam)?;

        if !self.has_sufficient_leaders() {
            let control = ChooseControl::promote_leader(self.master.clone())?;
            self.status = LobbyStatus::LeaderElection;
            self.choose_control = Some(control);
            return Ok(());
        }

        self.form_teams();
        self.status = LobbyStatus::TeamsCreated;
        Ok(())
    }

    pub fn promote_leader(&mut self, player_id: &str) -> Result<(), DomainError> {
        self.expect_status(LobbyStatus::LeaderElection)?;

        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::NotInLobby,
                    format!("profile {player_id} is not a lobby player"),
                )
            })?;
        if self.players[idx].role == Role::Leader {
            return Err(DomainError::validation(
                ValidationKind::ProfileIsAlreadyLeader,
                format!("profile {player_id} is already a leader"),
            ));
        }

        self.players[idx].role = Role::Leader;

        if self.has_sufficient_leaders() {
            self.form_teams();
            self.status = LobbyStatus::TeamsCreated;
            self.choose_control = None;
        }
        Ok(())
    }

    /// Scores every player and gives the first `SelectTeam` turn to the
    /// best-ranked leader.
    pub fn start_leader_team_selection(&mut self) -> Result<(), DomainError> {
        self.expect_status(LobbyStatus::TeamsCreated)?;

        let mut players = self.players.clone();
        assign_priorities(&mut players);

        let first = next_leader_in(&players, BEFORE_FIRST_TURN)
            .cloned()
            .ok_or_else(no_eligible_leader)?;
        let control = ChooseControl::select_team(first)?;

        self.players = players;
        self.status = LobbyStatus::LeaderTeamSelect;
        self.choose_control = Some(control);
        Ok(())
    }

    /// The acting leader takes team slot `team_id` and leaves the player pool.
    ///
    /// Team selection ends once the last slot is taken or no leader ranks
    /// behind the actor; the draft then opens with the best-ranked team leader.
    pub fn select_team(&mut self, actor_id: &str, team_id: usize) -> Result<(), DomainError> {
        self.expect_status(LobbyStatus::LeaderTeamSelect)?;

        let leader = self.player(actor_id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::NotInLobby,
                format!("profile {actor_id} is not a lobby player"),
            )
        })?;
        if !leader.is_leader() {
            return Err(DomainError::validation(
                ValidationKind::NotALeader,
                format!("profile {actor_id} is not a leader"),
            ));
        }
        self.expect_turn(actor_id)?;
        if team_id >= self.teams.len() {
            return Err(DomainError::validation(
                ValidationKind::InvalidTeam,
                format!("team {team_id} does not exist ({} teams)", self.teams.len()),
            ));
        }

        let leader = leader.clone();
        let players: Vec<Profile> = self
            .players
            .iter()
            .filter(|p| p.id != actor_id)
            .cloned()
            .collect();
        let mut teams = self.teams.clone();
        teams[team_id].leader = Some(leader.clone());

        let last_slot = team_id == teams.len() - 1;
        let (status, control) = match next_leader_in(&players, leader.turn_key()) {
            Some(next) if !last_slot => (
                LobbyStatus::LeaderTeamSelect,
                ChooseControl::select_team(next.clone())?,
            ),
            _ => {
                let first = next_team_leader_in(&teams, BEFORE_FIRST_TURN)
                    .cloned()
                    .ok_or_else(no_eligible_leader)?;
                (
                    LobbyStatus::PlayerSelect,
                    ChooseControl::select_player(first)?,
                )
            }
        };

        self.players = players;
        self.teams = teams;
        self.status = status;
        self.choose_control = Some(control);
        Ok(())
    }

    /// The acting team leader drafts `player_id` onto their team.
    ///
    /// Turns pass in ascending leader priority and wrap back to the
    /// best-ranked leader until the pool is empty.
    pub fn select_player(&mut self, actor_id: &str, player_id: &str) -> Result<(), DomainError> {
        self.expect_status(LobbyStatus::PlayerSelect)?;
        self.expect_turn(actor_id)?;

        let drafted = self.player(player_id).cloned().ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidPlayer,
                format!("player {player_id} is not in the lobby"),
            )
        })?;
        let team_idx = self
            .teams
            .iter()
            .position(|t| t.is_led_by(actor_id))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::TeamNotFound,
                    format!("profile {actor_id} leads no team"),
                )
            })?;
        let current = self
            .choose_control
            .as_ref()
            .map_or(BEFORE_FIRST_TURN, |c| c.choosing_now().turn_key());

        let players: Vec<Profile> = self
            .players
            .iter()
            .filter(|p| p.id != player_id)
            .cloned()
            .collect();

        let control = if players.is_empty() {
            None
        } else {
            let next = next_team_leader_in(&self.teams, current)
                .or_else(|| next_team_leader_in(&self.teams, BEFORE_FIRST_TURN))
                .cloned()
                .ok_or_else(no_eligible_leader)?;
            Some(ChooseControl::select_player(next)?)
        };

        self.teams[team_idx].players.push(drafted);
        self.players = players;
        if control.is_none() {
            self.status = LobbyStatus::ReadyToStart;
        }
        self.choose_control = control;
        Ok(())
    }

    /// Return to `Waiting` after a failed automatic phase, discarding any
    /// teams and turn the failed step produced.
    pub fn rollback_to_waiting(&mut self) {
        self.status = LobbyStatus::Waiting;
        self.choose_control = None;
        self.teams.clear();
    }

    /// True when there is at least one leader per mentor.
    pub fn has_sufficient_leaders(&self) -> bool {
        self.players.iter().filter(|p| p.is_leader()).count() >= self.mentors.len()
    }

    /// Best-ranked leader still in the pool whose turn key is above `after`.
    pub fn next_leader(&self, after: TurnKey) -> Option<&Profile> {
        next_leader_in(&self.players, after)
    }

    /// Best-ranked team leader whose turn key is above `after`.
    pub fn next_team_leader(&self, after: TurnKey) -> Option<&Profile> {
        next_team_leader_in(&self.teams, after)
    }

    fn form_teams(&mut self) {
        self.teams = self
            .mentors
            .iter()
            .enumerate()
            .map(|(i, mentor)| Team::new(i, mentor.clone()))
            .collect();
    }
}

fn next_leader_in(players: &[Profile], after: TurnKey) -> Option<&Profile> {
    players
        .iter()
        .filter(|p| p.is_leader() && p.turn_key() > after)
        .min_by_key(|p| p.turn_key())
}

fn next_team_leader_in(teams: &[Team], after: TurnKey) -> Option<&Profile> {
    teams
        .iter()
        .filter_map(|t| t.leader.as_ref())
        .filter(|l| l.turn_key() > after)
        .min_by_key(|l| l.turn_key())
}

fn no_eligible_leader() -> DomainError {
    DomainError::validation(ValidationKind::NoEligibleLeader, "no leader can take the next turn")
}
