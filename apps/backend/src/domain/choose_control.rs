//! The active-turn marker.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{Profile, Role};
use crate::errors::domain::{DomainError, ValidationKind};

/// Wire name of each turn kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooseType {
    PromoteLeader,
    #[serde(rename = "ChooseTeam")]
    SelectTeam,
    #[serde(rename = "ChoosePlayer")]
    SelectPlayer,
}

/// Who may act right now, and what for. A lobby with no active turn holds
/// `None` instead of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooseControl {
    /// The master promotes players until enough leaders exist.
    PromoteLeader { choosing_now: Profile },
    /// A leader claims a team slot.
    SelectTeam { choosing_now: Profile },
    /// A team leader drafts a player.
    SelectPlayer { choosing_now: Profile },
}

impl ChooseControl {
    pub fn promote_leader(master: Profile) -> Result<Self, DomainError> {
        if master.role != Role::Master {
            return Err(DomainError::validation(
                ValidationKind::Other("not_a_master".into()),
                format!("profile {} cannot run leader election", master.id),
            ));
        }
        Ok(Self::PromoteLeader {
            choosing_now: master,
        })
    }

    pub fn select_team(leader: Profile) -> Result<Self, DomainError> {
        require_leader(&leader)?;
        Ok(Self::SelectTeam {
            choosing_now: leader,
        })
    }

    pub fn select_player(leader: Profile) -> Result<Self, DomainError> {
        require_leader(&leader)?;
        Ok(Self::SelectPlayer {
            choosing_now: leader,
        })
    }

    pub fn choosing_now(&self) -> &Profile {
        match self {
            Self::PromoteLeader { choosing_now }
            | Self::SelectTeam { choosing_now }
            | Self::SelectPlayer { choosing_now } => choosing_now,
        }
    }

    pub fn kind(&self) -> ChooseType {
        match self {
            Self::PromoteLeader { .. } => ChooseType::PromoteLeader,
            Self::SelectTeam { .. } => ChooseType::SelectTeam,
            Self::SelectPlayer { .. } => ChooseType::SelectPlayer,
        }
    }
}

fn require_leader(profile: &Profile) -> Result<(), DomainError> {
    if profile.role != Role::Leader {
        return Err(DomainError::validation(
            ValidationKind::NotALeader,
            format!("profile {} is not a leader", profile.id),
        ));
    }
    Ok(())
}
