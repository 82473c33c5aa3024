//! Adding and removing rounds.

use crate::logic::{derive_group_counts, round_robin_matches};
use crate::models::{RoundSpec, TournamentPlan};

/// Advancing players assumed when the last round has none set.
const FALLBACK_ADVANCING: u32 = 2;
/// Concurrent groups assumed when the last round has none set.
const FALLBACK_CONCURRENT: u32 = 1;

/// Build the round that would follow `last` (or start from defaults when there is none).
///
/// Group size doubles the previous advancement, advancement halves it (at least 1 and always
/// below the group size), concurrency halves (at least 1).
pub fn next_round(last: Option<&RoundSpec>, number: usize) -> RoundSpec {
    let last_advancing = last
        .map(|r| r.advancing_players_per_group)
        .filter(|&n| n > 0)
        .unwrap_or(FALLBACK_ADVANCING);
    let last_concurrent = last
        .map(|r| r.concurrent_groups)
        .filter(|&n| n > 0)
        .unwrap_or(FALLBACK_CONCURRENT);

    let players_per_group = last_advancing.saturating_mul(2).max(2);
    let advancing = (last_advancing / 2).max(1).min(players_per_group - 1);

    RoundSpec {
        name: format!("Round {}", number),
        players_per_group,
        group_count: 1,
        matches_per_group: round_robin_matches(players_per_group),
        advancing_players_per_group: advancing,
        concurrent_groups: (last_concurrent / 2).max(1),
    }
}

/// Append a round seeded from the current last round, then re-derive group counts.
pub fn add_round(plan: &TournamentPlan) -> TournamentPlan {
    let mut next = plan.clone();
    let round = next_round(plan.rounds.last(), plan.rounds.len() + 1);
    log::debug!(
        "Adding {} ({} per group, {} advancing)",
        round.name,
        round.players_per_group,
        round.advancing_players_per_group
    );
    next.rounds.push(round);
    derive_group_counts(&next)
}

/// Remove the round at `index`, then re-derive group counts.
///
/// The last remaining round is never removed and an out-of-range index changes nothing;
/// both cases return the plan unchanged. Callers that need to tell the difference check
/// the round count first.
pub fn remove_round(plan: &TournamentPlan, index: usize) -> TournamentPlan {
    if plan.rounds.len() <= 1 || index >= plan.rounds.len() {
        return plan.clone();
    }
    let mut next = plan.clone();
    next.rounds.remove(index);
    derive_group_counts(&next)
}
