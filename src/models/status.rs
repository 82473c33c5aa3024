//! TournamentStatus as exchanged with the tournament store and listing views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a stored tournament.
///
/// Deserialization goes through [`TournamentStatus::from_external`], so any string is accepted
/// and unknown values become `Draft`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TournamentStatus {
    #[default]
    Draft,
    Active,
    Completed,
    Cancelled,
}

impl TournamentStatus {
    pub const ALL: [TournamentStatus; 4] = [
        TournamentStatus::Draft,
        TournamentStatus::Active,
        TournamentStatus::Completed,
        TournamentStatus::Cancelled,
    ];

    /// Map an external status string (any case, surrounding whitespace ignored).
    /// Unrecognized values default to `Draft`.
    pub fn from_external(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => TournamentStatus::Active,
            "completed" => TournamentStatus::Completed,
            "cancelled" => TournamentStatus::Cancelled,
            "draft" => TournamentStatus::Draft,
            other => {
                log::debug!("Unknown tournament status {:?}, using draft", other);
                TournamentStatus::Draft
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Draft => "draft",
            TournamentStatus::Active => "active",
            TournamentStatus::Completed => "completed",
            TournamentStatus::Cancelled => "cancelled",
        }
    }

    /// Capitalized label for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            TournamentStatus::Draft => "Draft",
            TournamentStatus::Active => "Active",
            TournamentStatus::Completed => "Completed",
            TournamentStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<String> for TournamentStatus {
    fn from(value: String) -> Self {
        Self::from_external(&value)
    }
}

impl From<&str> for TournamentStatus {
    fn from(value: &str) -> Self {
        Self::from_external(value)
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
