//! Submission gate: the last check before a plan is handed to the tournament store.

use crate::logic::validate_plan;
use crate::models::{SubmissionError, SubmittedTournament, TournamentPlan, ROUNDS_PATH};

/// Parse a raw submitted payload. Empty payloads and malformed JSON are fatal.
pub fn parse_submission(payload: &str) -> Result<SubmittedTournament, SubmissionError> {
    if payload.trim().is_empty() {
        return Err(SubmissionError::MissingPayload);
    }
    serde_json::from_str(payload).map_err(|e| SubmissionError::MalformedPayload(e.to_string()))
}

/// Map a plan error path onto the submitted payload's field names
/// (`rounds.0.concurrentGroups` becomes `rounds.0.concurrentGroupCount`).
fn submitted_field_path(path: &str) -> String {
    let mut segments = path.splitn(3, '.');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(ROUNDS_PATH), Some(index), Some(field)) => {
            let field = match field {
                "playersPerGroup" => "groupSize",
                "matchesPerGroup" => "matchCount",
                "advancingPlayersPerGroup" => "playerAdvancementCount",
                "concurrentGroups" => "concurrentGroupCount",
                other => other,
            };
            format!("{}.{}.{}", ROUNDS_PATH, index, field)
        }
        _ => path.to_string(),
    }
}

/// Validate an already parsed submission. Returns it unchanged when the plan is valid.
/// Errors are keyed by the submitted field names.
pub fn check_submission(
    submitted: SubmittedTournament,
) -> Result<SubmittedTournament, SubmissionError> {
    let report =
        validate_plan(&TournamentPlan::from(&submitted)).rename_paths(submitted_field_path);
    if !report.valid() {
        log::info!(
            "Rejected tournament {:?}: {} validation error(s)",
            submitted.name,
            report.len()
        );
        return Err(SubmissionError::Rejected(report));
    }
    log::info!(
        "Accepted tournament {:?}: {} players over {} round(s), first round seats {}",
        submitted.name,
        submitted.player_count,
        submitted.rounds.len(),
        submitted.planned_players()
    );
    Ok(submitted)
}

/// Parse and validate a raw payload in one step.
pub fn accept_submission(payload: &str) -> Result<SubmittedTournament, SubmissionError> {
    let submitted = parse_submission(payload)?;
    check_submission(submitted)
}

#[cfg(test)]
mod tests {
    use super::submitted_field_path;

    #[test]
    fn round_fields_use_submitted_names() {
        assert_eq!(submitted_field_path("rounds.2.playersPerGroup"), "rounds.2.groupSize");
        assert_eq!(submitted_field_path("rounds.0.matchesPerGroup"), "rounds.0.matchCount");
        assert_eq!(
            submitted_field_path("rounds.1.advancingPlayersPerGroup"),
            "rounds.1.playerAdvancementCount"
        );
        assert_eq!(submitted_field_path("rounds.0.groupCount"), "rounds.0.groupCount");
        assert_eq!(submitted_field_path("rounds"), "rounds");
        assert_eq!(submitted_field_path("startDate"), "startDate");
    }
}
