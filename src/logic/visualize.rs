//! Phase preview: one summary per phase, group phase first when enabled.

use crate::logic::round_robin_matches;
use crate::models::{PhaseSummary, TournamentPlan, GROUP_PHASE_NAME};

/// Project the plan into display rows. Read-only and safe on unvalidated plans.
///
/// Players entering a phase are the players leaving the one before it (the player count for
/// the first). A round's advancing players are the seats of the next round; the final round
/// advances a single winner.
pub fn project_phases(plan: &TournamentPlan) -> Vec<PhaseSummary> {
    let mut phases = Vec::with_capacity(plan.rounds.len() + 1);
    let mut total_players = u64::from(plan.player_count);

    if let (Some(group_count), Some(first), true) = (
        plan.group_phase_group_count(),
        plan.rounds.first(),
        plan.player_count > 0,
    ) {
        let advancing_players = plan.first_round_entrants();
        phases.push(PhaseSummary {
            name: GROUP_PHASE_NAME.to_string(),
            group_count,
            players_per_group: plan.group_phase_size,
            total_players,
            advancing_players,
            matches_per_group: round_robin_matches(plan.group_phase_size),
            advancing_players_per_group: first.advancing_players_per_group,
            concurrent_groups: plan.group_phase_size,
        });
        total_players = advancing_players;
    }

    for (index, round) in plan.rounds.iter().enumerate() {
        let advancing_players = plan.rounds.get(index + 1).map_or(1, |next| next.capacity());
        phases.push(PhaseSummary {
            name: round.name.clone(),
            group_count: round.group_count,
            players_per_group: round.players_per_group,
            total_players,
            advancing_players,
            matches_per_group: round.matches_per_group,
            advancing_players_per_group: round.advancing_players_per_group,
            concurrent_groups: round.concurrent_groups,
        });
        total_players = advancing_players;
    }
    phases
}
