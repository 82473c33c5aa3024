//! PhaseSummary: one read-only row of the phase preview.

use serde::{Deserialize, Serialize};

/// Display name of the synthetic entry for the group phase.
pub const GROUP_PHASE_NAME: &str = "Group Phase";

/// Summary of a single phase (group phase or round) for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseSummary {
    pub name: String,
    pub group_count: u32,
    pub players_per_group: u32,
    /// Players entering this phase.
    pub total_players: u64,
    /// Players leaving this phase (1 for the final round: the winner).
    pub advancing_players: u64,
    pub matches_per_group: u32,
    pub advancing_players_per_group: u32,
    pub concurrent_groups: u32,
}

impl PhaseSummary {
    /// Total matches across all groups of this phase.
    pub fn total_matches(&self) -> u64 {
        u64::from(self.group_count) * u64::from(self.matches_per_group)
    }
}
