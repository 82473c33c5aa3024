//! Integration tests for group count derivation.

use tournament_planner::{derive_group_counts, RoundSpec, TournamentPlan};

fn plan(player_count: u32, rounds: Vec<RoundSpec>) -> TournamentPlan {
    TournamentPlan::with_rounds(player_count, rounds)
}

fn group_counts(plan: &TournamentPlan) -> Vec<u32> {
    plan.rounds.iter().map(|r| r.group_count).collect()
}

#[test]
fn single_round_holding_everyone_has_one_group() {
    let p = plan(16, vec![RoundSpec::new("Final", 16, 1, 1)]);
    assert_eq!(group_counts(&derive_group_counts(&p)), vec![1]);
}

#[test]
fn later_rounds_follow_the_advancement_chain() {
    let p = plan(
        16,
        vec![RoundSpec::new("Round 1", 4, 2, 1), RoundSpec::new("Final", 8, 1, 1)],
    );
    // 16 / 4 = 4 groups; 4 * 2 = 8 advance into one group of 8.
    assert_eq!(group_counts(&derive_group_counts(&p)), vec![4, 1]);
}

#[test]
fn uneven_entrants_round_up() {
    let p = plan(
        10,
        vec![RoundSpec::new("Round 1", 4, 3, 1), RoundSpec::new("Final", 4, 1, 1)],
    );
    // ceil(10 / 4) = 3 groups; 3 * 3 = 9 advance; ceil(9 / 4) = 3.
    assert_eq!(group_counts(&derive_group_counts(&p)), vec![3, 3]);
}

#[test]
fn group_phase_feeds_first_round() {
    let mut p = plan(23, vec![RoundSpec::new("Round 1", 5, 2, 1)]);
    p.group_phase_enabled = true;
    p.group_phase_size = 5;
    assert_eq!(p.group_phase_group_count(), Some(5));
    // 5 groups * 2 advancing = 10 players; 10 / 5 = 2 groups.
    assert_eq!(group_counts(&derive_group_counts(&p)), vec![2]);
}

#[test]
fn no_players_leaves_plan_unchanged() {
    let mut p = plan(0, vec![RoundSpec::new("Round 1", 4, 2, 1)]);
    p.rounds[0].group_count = 7;
    assert_eq!(derive_group_counts(&p), p);
}

#[test]
fn group_size_below_two_divides_by_two_but_is_not_rewritten() {
    let p = plan(10, vec![RoundSpec::new("Round 1", 0, 1, 1)]);
    let derived = derive_group_counts(&p);
    assert_eq!(derived.rounds[0].group_count, 5);
    assert_eq!(derived.rounds[0].players_per_group, 0);
}

#[test]
fn at_least_one_group_even_with_nobody_advancing() {
    let p = plan(
        8,
        vec![RoundSpec::new("Round 1", 4, 0, 1), RoundSpec::new("Final", 4, 1, 1)],
    );
    assert_eq!(group_counts(&derive_group_counts(&p)), vec![2, 1]);
}

#[test]
fn input_plan_is_not_mutated() {
    let p = plan(32, vec![RoundSpec::new("Round 1", 4, 2, 1)]);
    let before = p.clone();
    let _ = derive_group_counts(&p);
    assert_eq!(p, before);
}

#[test]
fn derivation_is_idempotent() {
    let mut with_group_phase = plan(
        37,
        vec![RoundSpec::new("Round 1", 6, 3, 2), RoundSpec::new("Final", 5, 1, 1)],
    );
    with_group_phase.group_phase_enabled = true;
    with_group_phase.group_phase_size = 4;

    let mut stale = plan(
        100,
        vec![
            RoundSpec::new("Round 1", 8, 4, 4),
            RoundSpec::new("Round 2", 8, 2, 2),
            RoundSpec::new("Final", 3, 1, 1),
        ],
    );
    stale.rounds[1].group_count = 42;

    for p in [
        plan(16, vec![RoundSpec::new("Final", 16, 1, 1)]),
        plan(1, vec![RoundSpec::new("Final", 2, 1, 1)]),
        with_group_phase,
        stale,
    ] {
        let once = derive_group_counts(&p);
        assert_eq!(derive_group_counts(&once), once);
    }
}
