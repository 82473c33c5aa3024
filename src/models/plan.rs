//! TournamentPlan and RoundSpec: the editable structure of a tournament.

use crate::logic::round_robin_matches;
use serde::{Deserialize, Serialize};

/// Group size of the round a fresh plan starts with.
pub const DEFAULT_PLAYERS_PER_GROUP: u32 = 4;
/// Group size of the optional group phase until the user picks one.
pub const DEFAULT_GROUP_PHASE_SIZE: u32 = 4;

/// One round after the (optional) group phase.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSpec {
    pub name: String,
    /// Group size. Must be at least 2.
    pub players_per_group: u32,
    /// Derived by the group count pass; overwritten on every recomputation.
    #[serde(default = "one")]
    pub group_count: u32,
    /// Seeded from the round-robin count, then freely editable.
    pub matches_per_group: u32,
    /// Players leaving each group for the next round. `1 <= n < players_per_group`.
    pub advancing_players_per_group: u32,
    /// Groups played at the same time. `1 <= n <= group_count`.
    #[serde(default = "one")]
    pub concurrent_groups: u32,
}

fn one() -> u32 {
    1
}

impl RoundSpec {
    /// New round with `matches_per_group` seeded from a full round robin and one placeholder group.
    pub fn new(
        name: impl Into<String>,
        players_per_group: u32,
        advancing_players_per_group: u32,
        concurrent_groups: u32,
    ) -> Self {
        Self {
            name: name.into(),
            players_per_group,
            group_count: 1,
            matches_per_group: round_robin_matches(players_per_group),
            advancing_players_per_group,
            concurrent_groups,
        }
    }

    /// Change the group size. Matches per group follow the new round-robin default only if
    /// the current value is still the default of the old size; manual overrides stay.
    pub fn set_players_per_group(&mut self, players_per_group: u32) {
        if self.matches_per_group == round_robin_matches(self.players_per_group) {
            self.matches_per_group = round_robin_matches(players_per_group);
        }
        self.players_per_group = players_per_group;
    }

    /// Players needed to fill every group of this round.
    pub fn capacity(&self) -> u64 {
        u64::from(self.group_count) * u64::from(self.players_per_group)
    }

    /// Players this round sends on to the next one.
    pub fn advancing_total(&self) -> u64 {
        u64::from(self.group_count) * u64::from(self.advancing_players_per_group)
    }
}

/// Full editable tournament plan. Order of `rounds` is significant: index 0 is the first
/// round after the group phase.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentPlan {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// ISO date (`YYYY-MM-DD`) as entered; empty when not set yet.
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub player_count: u32,
    #[serde(default, alias = "groupPhase")]
    pub group_phase_enabled: bool,
    /// Only relevant when `group_phase_enabled`.
    #[serde(default = "default_group_phase_size", alias = "groupSize")]
    pub group_phase_size: u32,
    #[serde(default, alias = "allowPartiallyFilledGroups")]
    pub allow_underfilled_groups: bool,
    pub rounds: Vec<RoundSpec>,
}

fn default_group_phase_size() -> u32 {
    DEFAULT_GROUP_PHASE_SIZE
}

impl Default for TournamentPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl TournamentPlan {
    /// Empty plan with a single default round.
    pub fn new() -> Self {
        let players = DEFAULT_PLAYERS_PER_GROUP;
        Self {
            name: String::new(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            player_count: 0,
            group_phase_enabled: false,
            group_phase_size: DEFAULT_GROUP_PHASE_SIZE,
            allow_underfilled_groups: false,
            rounds: vec![RoundSpec::new("Round 1", players, players / 2, 1)],
        }
    }

    /// Plan for `player_count` players with the given rounds (group counts not derived yet).
    pub fn with_rounds(player_count: u32, rounds: Vec<RoundSpec>) -> Self {
        Self {
            player_count,
            rounds,
            ..Self::new()
        }
    }

    /// Number of groups in the group phase, or `None` if it is disabled.
    pub fn group_phase_group_count(&self) -> Option<u32> {
        if !self.group_phase_enabled {
            return None;
        }
        Some(self.player_count.div_ceil(self.group_phase_size.max(2)))
    }

    /// Players entering round 0: the raw player count, or what the group phase sends on.
    pub fn first_round_entrants(&self) -> u64 {
        match (self.group_phase_group_count(), self.rounds.first()) {
            (Some(groups), Some(first)) => {
                u64::from(groups) * u64::from(first.advancing_players_per_group)
            }
            (Some(_), None) => 0,
            (None, _) => u64::from(self.player_count),
        }
    }
}
