//! Property tests for the turn-order scoring (pure domain).
//!
//! - Leadership + GDP outranks every other eligible profile.
//! - Within a band, earlier joiners rank strictly better.
//! - Ineligible profiles never consume a counter slot.
//! - Turn keys are unique across any roster size.

use proptest::prelude::*;

use crate::domain::priority::{assign_priorities, LEADERSHIP_WEIGHT};
use crate::domain::profile::{HardSkill, Profile, Role, SoftSkill, NO_PRIORITY};
use crate::domain::test_prelude;

#[derive(Debug, Clone, Copy)]
enum Band {
    Both,
    Leadership,
    Gdp,
    Promoted,
    Plain,
}

fn band() -> impl Strategy<Value = Band> {
    prop_oneof![
        Just(Band::Both),
        Just(Band::Leadership),
        Just(Band::Gdp),
        Just(Band::Promoted),
        Just(Band::Plain),
    ]
}

fn profile_in(band: Band, idx: usize) -> Profile {
    let (hard, soft) = match band {
        Band::Both => (vec![HardSkill::Gdp], vec![SoftSkill::Leadership]),
        Band::Leadership => (vec![], vec![SoftSkill::Leadership]),
        Band::Gdp => (vec![HardSkill::Gdp], vec![]),
        Band::Promoted | Band::Plain => (vec![HardSkill::Design], vec![SoftSkill::Empathy]),
    };
    let mut p = Profile::new_player(format!("p{idx}"), "a.png", hard, soft);
    if matches!(band, Band::Promoted) {
        p.role = Role::Leader;
    }
    p.join_timestamp = idx as i64;
    p
}

fn roster_of(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<(Band, Profile)>> {
    prop::collection::vec(band(), len).prop_map(|bands| {
        bands
            .into_iter()
            .enumerate()
            .map(|(i, b)| (b, profile_in(b, i)))
            .collect()
    })
}

fn roster() -> impl Strategy<Value = Vec<(Band, Profile)>> {
    roster_of(1..40)
}

/// Band ordering holds among at most `LEADERSHIP_WEIGHT` eligible joiners.
fn join_batch() -> impl Strategy<Value = Vec<(Band, Profile)>> {
    roster_of(1..LEADERSHIP_WEIGHT as usize + 1)
}

fn scored(roster: &[(Band, Profile)]) -> Vec<(Band, i32)> {
    let mut players: Vec<Profile> = roster.iter().map(|(_, p)| p.clone()).collect();
    assign_priorities(&mut players);
    roster
        .iter()
        .zip(players)
        .map(|((b, _), p)| (*b, p.selection_priority))
        .collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_both_skills_outrank_everyone_else(roster in join_batch()) {
        let scores = scored(&roster);
        for (b, s) in scores.iter().filter(|(b, _)| matches!(b, Band::Both)) {
            prop_assert!(*s >= 0, "{b:?} must be eligible");
            for (other, t) in &scores {
                match other {
                    Band::Both => {}
                    Band::Plain => prop_assert_eq!(*t, NO_PRIORITY),
                    _ => prop_assert!(s < t, "{s} should rank before {other:?} at {t}"),
                }
            }
        }
    }

    #[test]
    fn prop_earlier_joiner_wins_within_band(roster in roster()) {
        let scores = scored(&roster);
        for (i, (bi, si)) in scores.iter().enumerate() {
            for (bj, sj) in scores.iter().skip(i + 1) {
                let same_band = std::mem::discriminant(bi) == std::mem::discriminant(bj);
                if same_band && *si >= 0 {
                    prop_assert!(si < sj, "{si} should rank before {sj}");
                }
            }
        }
    }

    #[test]
    fn prop_counter_counts_only_eligible(roster in roster()) {
        let scores = scored(&roster);
        let mut eligible = 0;
        for (b, s) in &scores {
            let base = match b {
                Band::Both => 0,
                Band::Leadership => 10,
                Band::Gdp => 100,
                Band::Promoted => 1000,
                Band::Plain => {
                    prop_assert_eq!(*s, NO_PRIORITY);
                    continue;
                }
            };
            prop_assert_eq!(*s, base + eligible);
            eligible += 1;
        }
    }

    #[test]
    fn prop_bands_are_strictly_ordered(roster in join_batch()) {
        let rank = |b: &Band| match b {
            Band::Both => 0,
            Band::Leadership => 1,
            Band::Gdp => 2,
            Band::Promoted => 3,
            Band::Plain => 4,
        };
        let scores = scored(&roster);
        for (bi, si) in &scores {
            for (bj, sj) in &scores {
                if *si >= 0 && *sj >= 0 && rank(bi) < rank(bj) {
                    prop_assert!(si < sj);
                }
            }
        }
    }

    #[test]
    fn prop_turn_keys_are_unique(roster in roster()) {
        let mut players: Vec<Profile> = roster.into_iter().map(|(_, p)| p).collect();
        assign_priorities(&mut players);
        let mut keys: Vec<_> = players
            .iter()
            .filter(|p| p.selection_priority >= 0)
            .map(Profile::turn_key)
            .collect();
        let eligible = keys.len();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(keys.len(), eligible);
    }
}
