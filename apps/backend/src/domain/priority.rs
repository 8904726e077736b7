//! Turn-order scoring.
//!
//! Each eligible player gets `counter + band`, where the counter advances
//! once per eligible player in join order. Lower scores act first.
//!
//! | band                    | weight |
//! |-------------------------|--------|
//! | Leadership + GDP        | 0      |
//! | Leadership              | 10     |
//! | GDP                     | 100    |
//! | promoted leader         | 1000   |
//!
//! Anyone else scores [`NO_PRIORITY`] and does not advance the counter.
//!
//! Past ten eligible players the bands interleave and scores can tie, so
//! turns are ordered by [`Profile::turn_key`], which appends the counter slot.

use crate::domain::profile::{HardSkill, Profile, Role, SoftSkill, NO_PRIORITY};

pub const LEADERSHIP_WEIGHT: i32 = 10;
pub const GDP_WEIGHT: i32 = 100;
pub const ELECTED_LEADER_WEIGHT: i32 = 1000;

/// Score for `profile` given the running counter, or `None` when ineligible.
pub fn priority_weight(profile: &Profile, current: i32) -> Option<i32> {
    let leadership = profile.has_soft_skill(SoftSkill::Leadership);
    let gdp = profile.has_hard_skill(HardSkill::Gdp);

    match (leadership, gdp) {
        (true, true) => Some(current),
        (true, false) => Some(current + LEADERSHIP_WEIGHT),
        (false, true) => Some(current + GDP_WEIGHT),
        (false, false) if profile.role == Role::Leader => Some(current + ELECTED_LEADER_WEIGHT),
        _ => None,
    }
}

/// Reorder `players` by join time and assign every selection priority.
///
/// The join-time sort is stable, so equal join times keep their insertion
/// order. Each eligible player also records its counter slot.
pub fn assign_priorities(players: &mut [Profile]) {
    players.sort_by_key(|p| p.join_timestamp);

    let mut current = 0;
    for player in players.iter_mut() {
        match priority_weight(player, current) {
            Some(weight) => {
                player.selection_priority = weight;
                player.selection_order = current;
                current += 1;
            }
            None => {
                player.selection_priority = NO_PRIORITY;
                player.selection_order = NO_PRIORITY;
            }
        }
    }
}
