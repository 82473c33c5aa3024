//! Group count derivation: how many groups each round needs, following the advancement chain.

use crate::models::TournamentPlan;

/// Smallest group size the derivation divides by.
const MIN_GROUP_SIZE: u32 = 2;

/// Recompute `group_count` of every round and return the updated plan.
///
/// 1. Players entering round 0 are the player count, or with a group phase
///    `ceil(player_count / group_phase_size) * rounds[0].advancing_players_per_group`.
/// 2. Players entering round i > 0 are `group_count[i-1] * advancing[i-1]` (freshly derived).
/// 3. `group_count[i] = max(1, ceil(entering / players_per_group[i]))`.
///
/// Plans with no players or no rounds come back unchanged. Group counts depend only on the
/// player count, group phase settings and each round's group size and advancement, so
/// deriving twice gives the same plan as deriving once.
pub fn derive_group_counts(plan: &TournamentPlan) -> TournamentPlan {
    let mut derived = plan.clone();
    if derived.player_count == 0 || derived.rounds.is_empty() {
        return derived;
    }

    let mut entering = derived.first_round_entrants();
    let mut previous: Option<(u32, u32)> = None;
    for round in derived.rounds.iter_mut() {
        if let Some((group_count, advancing)) = previous {
            entering = u64::from(group_count) * u64::from(advancing);
        }
        // Stored size stays as entered so validation still flags it.
        let group_size = u64::from(round.players_per_group.max(MIN_GROUP_SIZE));
        let groups = entering.div_ceil(group_size).max(1);
        round.group_count = u32::try_from(groups).unwrap_or(u32::MAX);
        previous = Some((round.group_count, round.advancing_players_per_group));
    }

    log::debug!(
        "Derived group counts for {} players: {:?}",
        derived.player_count,
        derived.rounds.iter().map(|r| r.group_count).collect::<Vec<_>>()
    );
    derived
}
