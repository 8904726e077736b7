use crate::domain::profile::{Profile, Role};

/// A mentor-led team. `id` is the team's index in its lobby.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: usize,
    mentor: Profile,
    pub leader: Option<Profile>,
    pub players: Vec<Profile>,
}

impl Team {
    /// Panics if `mentor` does not hold the `Mentor` role.
    pub fn new(id: usize, mentor: Profile) -> Self {
        assert!(
            mentor.role == Role::Mentor,
            "team {id} mentor {} has role {:?}, expected Mentor",
            mentor.id,
            mentor.role
        );
        Self {
            id,
            mentor,
            leader: None,
            players: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn mentor(&self) -> &Profile {
        &self.mentor
    }

    pub fn is_led_by(&self, profile_id: &str) -> bool {
        self.leader.as_ref().is_some_and(|l| l.id == profile_id)
    }
}
