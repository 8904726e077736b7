use crate::domain::fixtures::{gdp, leadership, leadership_gdp, plain};
use crate::domain::priority::{
    assign_priorities, priority_weight, ELECTED_LEADER_WEIGHT, GDP_WEIGHT, LEADERSHIP_WEIGHT,
};
use crate::domain::profile::{Role, NO_PRIORITY};

#[test]
fn weight_per_band() {
    assert_eq!(priority_weight(&leadership_gdp("a"), 3), Some(3));
    assert_eq!(priority_weight(&leadership("a"), 3), Some(3 + LEADERSHIP_WEIGHT));
    assert_eq!(priority_weight(&gdp("a"), 3), Some(3 + GDP_WEIGHT));

    let mut promoted = plain("a");
    promoted.role = Role::Leader;
    assert_eq!(priority_weight(&promoted, 3), Some(3 + ELECTED_LEADER_WEIGHT));

    assert_eq!(priority_weight(&plain("a"), 3), None);
}

#[test]
fn counter_skips_ineligible_players() {
    let mut players = vec![plain("p0"), leadership("l1"), plain("p2"), gdp("g3")];
    for (i, p) in players.iter_mut().enumerate() {
        p.join_timestamp = 100 + i as i64;
    }

    assign_priorities(&mut players);

    let prios: Vec<i32> = players.iter().map(|p| p.selection_priority).collect();
    assert_eq!(prios, vec![NO_PRIORITY, LEADERSHIP_WEIGHT, NO_PRIORITY, 1 + GDP_WEIGHT]);
}

#[test]
fn players_are_reordered_by_join_time() {
    let mut late = leadership("late");
    late.join_timestamp = 200;
    let mut early = leadership("early");
    early.join_timestamp = 100;
    let mut players = vec![late, early];

    assign_priorities(&mut players);

    assert_eq!(players[0].name, "early");
    assert_eq!(players[0].selection_priority, LEADERSHIP_WEIGHT);
    assert_eq!(players[1].selection_priority, 1 + LEADERSHIP_WEIGHT);
}

#[test]
fn equal_join_times_keep_insertion_order() {
    let mut players = vec![gdp("first"), gdp("second"), gdp("third")];
    for p in &mut players {
        p.join_timestamp = 42;
    }

    assign_priorities(&mut players);

    let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    assert!(players
        .windows(2)
        .all(|w| w[0].selection_priority < w[1].selection_priority));
}

#[test]
fn join_order_slot_breaks_score_ties() {
    let mut players = vec![leadership("lead")];
    players.extend((0..10).map(|i| leadership_gdp(&format!("b{i}"))));
    for (i, p) in players.iter_mut().enumerate() {
        p.join_timestamp = i as i64;
    }

    assign_priorities(&mut players);

    let lead = &players[0];
    let last = &players[10];
    assert_eq!(lead.selection_priority, last.selection_priority);
    assert_eq!(lead.turn_key(), (LEADERSHIP_WEIGHT, 0));
    assert_eq!(last.turn_key(), (LEADERSHIP_WEIGHT, 10));
    assert!(lead.turn_key() < last.turn_key());
    assert_eq!(plain("x").turn_key(), (NO_PRIORITY, NO_PRIORITY));
}
