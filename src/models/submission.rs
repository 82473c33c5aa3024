//! Submitted tournament payload: the shape handed to the tournament store.

use crate::models::plan::{RoundSpec, TournamentPlan};
use serde::{Deserialize, Serialize};

/// A round as submitted for persistence.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRound {
    pub name: String,
    pub match_count: u32,
    pub player_advancement_count: u32,
    pub group_size: u32,
    pub group_count: u32,
    pub concurrent_group_count: u32,
}

/// A whole tournament as submitted for persistence. Has no group phase fields.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedTournament {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub allow_underfilled_groups: bool,
    pub player_count: u32,
    pub rounds: Vec<SubmittedRound>,
}

impl From<&RoundSpec> for SubmittedRound {
    fn from(round: &RoundSpec) -> Self {
        Self {
            name: round.name.clone(),
            match_count: round.matches_per_group,
            player_advancement_count: round.advancing_players_per_group,
            group_size: round.players_per_group,
            group_count: round.group_count,
            concurrent_group_count: round.concurrent_groups,
        }
    }
}

impl From<&SubmittedRound> for RoundSpec {
    fn from(round: &SubmittedRound) -> Self {
        Self {
            name: round.name.clone(),
            players_per_group: round.group_size,
            group_count: round.group_count,
            matches_per_group: round.match_count,
            advancing_players_per_group: round.player_advancement_count,
            concurrent_groups: round.concurrent_group_count,
        }
    }
}

impl From<&TournamentPlan> for SubmittedTournament {
    fn from(plan: &TournamentPlan) -> Self {
        Self {
            name: plan.name.trim().to_string(),
            description: plan.description.clone(),
            start_date: plan.start_date.clone(),
            end_date: plan.end_date.clone(),
            allow_underfilled_groups: plan.allow_underfilled_groups,
            player_count: plan.player_count,
            rounds: plan.rounds.iter().map(SubmittedRound::from).collect(),
        }
    }
}

impl From<&SubmittedTournament> for TournamentPlan {
    fn from(submitted: &SubmittedTournament) -> Self {
        Self {
            name: submitted.name.trim().to_string(),
            description: submitted.description.clone(),
            start_date: submitted.start_date.clone(),
            end_date: submitted.end_date.clone(),
            player_count: submitted.player_count,
            group_phase_enabled: false,
            allow_underfilled_groups: submitted.allow_underfilled_groups,
            rounds: submitted.rounds.iter().map(RoundSpec::from).collect(),
            ..TournamentPlan::new()
        }
    }
}

impl SubmittedTournament {
    /// Players the first round was planned for (group count times group size).
    pub fn planned_players(&self) -> u64 {
        self.rounds
            .first()
            .map(|r| u64::from(r.group_count) * u64::from(r.group_size))
            .unwrap_or(0)
    }
}
