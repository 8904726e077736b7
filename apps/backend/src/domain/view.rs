//! Read-only views handed to callers and cached by access code.
//!
//! Selection priority is internal turn-order state and never appears here.

use serde::{Deserialize, Serialize};

use crate::domain::choose_control::{ChooseControl, ChooseType};
use crate::domain::lobby::{Lobby, LobbyStatus};
use crate::domain::profile::{HardSkill, Profile, Role, SoftSkill};
use crate::domain::team::Team;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub id: String,
    pub avatar: String,
    pub name: String,
    pub role: Role,
    pub hard_skills: Vec<HardSkill>,
    pub soft_skills: Vec<SoftSkill>,
    pub join_timestamp: i64,
}

impl From<&Profile> for ProfileView {
    fn from(p: &Profile) -> Self {
        Self {
            id: p.id.clone(),
            avatar: p.avatar.clone(),
            name: p.name.clone(),
            role: p.role,
            hard_skills: p.hard_skills.clone(),
            soft_skills: p.soft_skills.clone(),
            join_timestamp: p.join_timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamView {
    pub id: usize,
    pub mentor: ProfileView,
    pub leader: Option<ProfileView>,
    pub players: Vec<ProfileView>,
}

impl From<&Team> for TeamView {
    fn from(t: &Team) -> Self {
        Self {
            id: t.id(),
            mentor: t.mentor().into(),
            leader: t.leader.as_ref().map(ProfileView::from),
            players: t.players.iter().map(ProfileView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooseControlView {
    pub choosing_now: ProfileView,
    #[serde(rename = "type")]
    pub kind: ChooseType,
}

impl From<&ChooseControl> for ChooseControlView {
    fn from(c: &ChooseControl) -> Self {
        Self {
            choosing_now: c.choosing_now().into(),
            kind: c.kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyView {
    pub access_code: String,
    pub name: String,
    pub max_hard_skills: usize,
    pub max_soft_skills: usize,
    pub status: LobbyStatus,
    pub players: Vec<ProfileView>,
    pub mentors: Vec<ProfileView>,
    pub master: ProfileView,
    pub teams: Vec<TeamView>,
    pub choose_control: Option<ChooseControlView>,
}

impl From<&Lobby> for LobbyView {
    fn from(lobby: &Lobby) -> Self {
        Self {
            access_code: lobby.access_code().to_string(),
            name: lobby.name().to_string(),
            max_hard_skills: lobby.max_hard_skills(),
            max_soft_skills: lobby.max_soft_skills(),
            status: lobby.status(),
            players: lobby.players().iter().map(ProfileView::from).collect(),
            mentors: lobby.mentors().iter().map(ProfileView::from).collect(),
            master: lobby.master().into(),
            teams: lobby.teams().iter().map(TeamView::from).collect(),
            choose_control: lobby.choose_control().map(ChooseControlView::from),
        }
    }
}
