//! CSV export of the phase preview.

use crate::models::PhaseSummary;
use std::fmt;

/// Failure while writing the CSV document.
#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Encoding(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Csv(e) => write!(f, "Could not write CSV: {}", e),
            ExportError::Encoding(e) => write!(f, "Could not encode CSV: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e)
    }
}

const HEADER: [&str; 9] = [
    "name",
    "groupCount",
    "playersPerGroup",
    "totalPlayers",
    "advancingPlayers",
    "matchesPerGroup",
    "advancingPlayersPerGroup",
    "concurrentGroups",
    "totalMatches",
];

/// Header row plus one record per phase. Columns are named like the JSON fields, with the
/// phase's total match count last.
pub fn phases_to_csv(phases: &[PhaseSummary]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for phase in phases {
        writer.write_record([
            phase.name.clone(),
            phase.group_count.to_string(),
            phase.players_per_group.to_string(),
            phase.total_players.to_string(),
            phase.advancing_players.to_string(),
            phase.matches_per_group.to_string(),
            phase.advancing_players_per_group.to_string(),
            phase.concurrent_groups.to_string(),
            phase.total_matches().to_string(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Encoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Encoding(e.to_string()))
}
