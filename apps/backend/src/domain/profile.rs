//! Participant profiles and the skill catalogue.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Selection priority of a profile that may not take a turn.
pub const NO_PRIORITY: i32 = -1;

/// Total turn order: selection priority, then the join-order slot that breaks
/// ties once the skill bands interleave.
pub type TurnKey = (i32, i32);

/// Ranks before every eligible profile.
pub const BEFORE_FIRST_TURN: TurnKey = (NO_PRIORITY, NO_PRIORITY);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HardSkill {
    #[serde(rename = "IA")]
    Ia,
    #[serde(rename = "GDP")]
    Gdp,
    Marketing,
    English,
    Design,
    Programming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoftSkill {
    Communication,
    Creativity,
    Organization,
    Empathy,
    ProblemSolving,
    Collaboration,
    Leadership,
    Proactivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Master,
    Mentor,
    Player,
    Leader,
}

/// Any lobby participant.
///
/// `join_timestamp` stays 0 until the profile formally joins a lobby.
/// `selection_priority` is only meaningful for players; lower non-negative
/// values act first and [`NO_PRIORITY`] never acts. `selection_order` is the
/// profile's slot among eligible players in join order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub hard_skills: Vec<HardSkill>,
    pub soft_skills: Vec<SoftSkill>,
    pub role: Role,
    pub join_timestamp: i64,
    pub selection_priority: i32,
    pub selection_order: i32,
}

fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

impl Profile {
    /// A player enters as `Leader` when their skills already qualify them.
    pub fn new_player(
        name: impl Into<String>,
        avatar: impl Into<String>,
        hard_skills: Vec<HardSkill>,
        soft_skills: Vec<SoftSkill>,
    ) -> Self {
        let qualifies = soft_skills.contains(&SoftSkill::Leadership)
            || hard_skills.contains(&HardSkill::Gdp);
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            avatar: avatar.into(),
            hard_skills,
            soft_skills,
            role: if qualifies { Role::Leader } else { Role::Player },
            join_timestamp: 0,
            selection_priority: NO_PRIORITY,
            selection_order: NO_PRIORITY,
        }
    }

    pub fn new_master(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self::staff(name.into(), avatar.into(), Role::Master)
    }

    pub fn new_mentor(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self::staff(name.into(), avatar.into(), Role::Mentor)
    }

    fn staff(name: String, avatar: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            avatar,
            hard_skills: Vec::new(),
            soft_skills: Vec::new(),
            role,
            join_timestamp: now_unix(),
            selection_priority: NO_PRIORITY,
            selection_order: NO_PRIORITY,
        }
    }

    /// Stamp the join time with the current epoch second.
    pub fn join(&mut self) {
        self.join_timestamp = now_unix();
    }

    pub fn has_hard_skill(&self, skill: HardSkill) -> bool {
        self.hard_skills.contains(&skill)
    }

    pub fn has_soft_skill(&self, skill: SoftSkill) -> bool {
        self.soft_skills.contains(&skill)
    }

    pub fn is_leader(&self) -> bool {
        self.role == Role::Leader
    }

    pub fn turn_key(&self) -> TurnKey {
        (self.selection_priority, self.selection_order)
    }
}
