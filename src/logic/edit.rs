//! Plan edits as a pure reducer: every edit yields a new plan with re-derived group counts.

use crate::logic::{add_round, derive_group_counts, remove_round};
use crate::models::{RoundSpec, TournamentPlan};
use serde::{Deserialize, Serialize};

/// A single user edit of the plan.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanEdit {
    SetName { name: String },
    SetDescription { description: String },
    SetStartDate { date: String },
    SetEndDate { date: String },
    SetPlayerCount { player_count: u32 },
    SetGroupPhaseEnabled { enabled: bool },
    SetGroupPhaseSize { size: u32 },
    SetAllowUnderfilledGroups { allow: bool },
    AddRound,
    RemoveRound { index: usize },
    SetRoundName { index: usize, name: String },
    /// Also reseeds matches per group unless they were overridden.
    SetPlayersPerGroup { index: usize, players: u32 },
    SetMatchesPerGroup { index: usize, matches: u32 },
    SetAdvancingPlayersPerGroup { index: usize, advancing: u32 },
    SetConcurrentGroups { index: usize, concurrent: u32 },
}

/// Apply `edit` to `plan`. Edits naming a round that does not exist change nothing.
pub fn apply_edit(plan: &TournamentPlan, edit: PlanEdit) -> TournamentPlan {
    let mut next = plan.clone();
    match edit {
        PlanEdit::SetName { name } => next.name = name,
        PlanEdit::SetDescription { description } => next.description = description,
        PlanEdit::SetStartDate { date } => next.start_date = date,
        PlanEdit::SetEndDate { date } => next.end_date = date,
        PlanEdit::SetPlayerCount { player_count } => next.player_count = player_count,
        PlanEdit::SetGroupPhaseEnabled { enabled } => next.group_phase_enabled = enabled,
        PlanEdit::SetGroupPhaseSize { size } => next.group_phase_size = size,
        PlanEdit::SetAllowUnderfilledGroups { allow } => next.allow_underfilled_groups = allow,
        PlanEdit::AddRound => return add_round(plan),
        PlanEdit::RemoveRound { index } => return remove_round(plan, index),
        PlanEdit::SetRoundName { index, name } => {
            edit_round(&mut next, index, |r| r.name = name);
        }
        PlanEdit::SetPlayersPerGroup { index, players } => {
            edit_round(&mut next, index, |r| r.set_players_per_group(players));
        }
        PlanEdit::SetMatchesPerGroup { index, matches } => {
            edit_round(&mut next, index, |r| r.matches_per_group = matches);
        }
        PlanEdit::SetAdvancingPlayersPerGroup { index, advancing } => {
            edit_round(&mut next, index, |r| r.advancing_players_per_group = advancing);
        }
        PlanEdit::SetConcurrentGroups { index, concurrent } => {
            edit_round(&mut next, index, |r| r.concurrent_groups = concurrent);
        }
    }
    derive_group_counts(&next)
}

fn edit_round(plan: &mut TournamentPlan, index: usize, f: impl FnOnce(&mut RoundSpec)) {
    match plan.rounds.get_mut(index) {
        Some(round) => f(round),
        None => log::debug!("Ignoring edit of missing round {}", index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_count_edit_rederives_groups() {
        let plan = TournamentPlan::new();
        let next = apply_edit(&plan, PlanEdit::SetPlayerCount { player_count: 16 });
        assert_eq!(next.rounds[0].group_count, 4);
        assert_eq!(plan.rounds[0].group_count, 1);
    }

    #[test]
    fn edit_of_missing_round_is_ignored() {
        let plan = apply_edit(&TournamentPlan::new(), PlanEdit::SetPlayerCount { player_count: 8 });
        let next = apply_edit(&plan, PlanEdit::SetMatchesPerGroup { index: 3, matches: 9 });
        assert_eq!(next, plan);
    }

    #[test]
    fn edits_deserialize_from_tagged_json() {
        let edit: PlanEdit =
            serde_json::from_str(r#"{"type": "set_players_per_group", "index": 0, "players": 6}"#)
                .unwrap();
        assert_eq!(edit, PlanEdit::SetPlayersPerGroup { index: 0, players: 6 });
    }
}
