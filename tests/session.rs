//! Integration tests for the editing session and the edit reducer.

use std::cell::RefCell;
use std::rc::Rc;
use tournament_planner::{PlanEdit, PlanSession};

#[test]
fn subscribers_see_every_new_plan() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut session = PlanSession::default();
    let sink = Rc::clone(&seen);
    session.subscribe(move |plan| sink.borrow_mut().push(plan.rounds.len()));

    session.dispatch(PlanEdit::SetPlayerCount { player_count: 16 });
    session.dispatch(PlanEdit::AddRound);
    session.dispatch(PlanEdit::RemoveRound { index: 0 });
    session.dispatch(PlanEdit::RemoveRound { index: 0 });

    assert_eq!(*seen.borrow(), vec![1, 2, 1, 1]);
}

#[test]
fn building_a_valid_plan_through_edits() {
    let mut session = PlanSession::default();
    for edit in [
        PlanEdit::SetName {
            name: "Club Championship".to_string(),
        },
        PlanEdit::SetDescription {
            description: "Season finale".to_string(),
        },
        PlanEdit::SetStartDate {
            date: "2026-06-01".to_string(),
        },
        PlanEdit::SetEndDate {
            date: "2026-06-02".to_string(),
        },
        PlanEdit::SetPlayerCount { player_count: 16 },
        PlanEdit::AddRound,
        PlanEdit::SetPlayersPerGroup {
            index: 1,
            players: 8,
        },
        PlanEdit::SetConcurrentGroups {
            index: 0,
            concurrent: 2,
        },
    ] {
        session.dispatch(edit);
    }

    let plan = session.plan();
    assert_eq!(plan.rounds[0].group_count, 4);
    assert_eq!(plan.rounds[1].group_count, 1);
    assert_eq!(plan.rounds[1].matches_per_group, 28);
    assert!(session.validate().valid(), "{:?}", session.validate().messages());
    assert_eq!(session.phases().len(), 2);
}

#[test]
fn manual_match_count_survives_group_size_change() {
    let mut session = PlanSession::default();
    session.dispatch(PlanEdit::SetMatchesPerGroup {
        index: 0,
        matches: 3,
    });
    session.dispatch(PlanEdit::SetPlayersPerGroup {
        index: 0,
        players: 6,
    });
    assert_eq!(session.plan().rounds[0].matches_per_group, 3);
}
