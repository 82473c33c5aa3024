//! Integration tests for the submission gate.

use tournament_planner::{
    accept_submission, parse_submission, SubmissionError, SubmittedTournament, TournamentPlan,
    ValidationError,
};

const VALID_PAYLOAD: &str = r#"{
    "name": "Autumn League",
    "description": "Two rounds, sixteen players",
    "startDate": "2026-10-01",
    "endDate": "2026-10-02",
    "allowUnderfilledGroups": false,
    "playerCount": 16,
    "rounds": [
        {"name": "Round 1", "matchCount": 6, "playerAdvancementCount": 2,
         "groupSize": 4, "groupCount": 4, "concurrentGroupCount": 2},
        {"name": "Final", "matchCount": 28, "playerAdvancementCount": 1,
         "groupSize": 8, "groupCount": 1, "concurrentGroupCount": 1}
    ]
}"#;

#[test]
fn valid_payload_is_accepted() {
    let submitted = accept_submission(VALID_PAYLOAD).unwrap();
    assert_eq!(submitted.name, "Autumn League");
    assert_eq!(submitted.rounds.len(), 2);
    assert_eq!(submitted.planned_players(), 16);
}

#[test]
fn empty_payload_is_missing() {
    assert_eq!(accept_submission("  "), Err(SubmissionError::MissingPayload));
}

#[test]
fn malformed_payload_is_rejected_before_validation() {
    assert!(matches!(
        parse_submission("{\"name\": \"Autumn League\""),
        Err(SubmissionError::MalformedPayload(_))
    ));
    assert!(matches!(
        accept_submission(r#"{"name": "x", "playerCount": -4}"#),
        Err(SubmissionError::MalformedPayload(_))
    ));
}

#[test]
fn inconsistent_payload_is_rejected_with_report() {
    let payload = VALID_PAYLOAD.replace("\"groupSize\": 8", "\"groupSize\": 6");
    match accept_submission(&payload) {
        Err(SubmissionError::Rejected(report)) => {
            assert!(!report.valid());
            assert_eq!(
                report.get("rounds"),
                Some(&ValidationError::ChainMismatch {
                    round: 1,
                    expected: 8,
                    actual: 6
                })
            );
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn plan_and_submission_convert_both_ways() {
    let submitted = parse_submission(VALID_PAYLOAD).unwrap();
    let plan = TournamentPlan::from(&submitted);
    assert!(!plan.group_phase_enabled);
    assert_eq!(plan.rounds[0].players_per_group, 4);
    assert_eq!(plan.rounds[0].concurrent_groups, 2);
    assert_eq!(SubmittedTournament::from(&plan), submitted);
}

#[test]
fn short_name_description_and_round_name_are_rejected() {
    let payload = VALID_PAYLOAD
        .replace("\"Autumn League\"", "\"ab\"")
        .replace("\"Two rounds, sixteen players\"", "\"\"")
        .replace("\"name\": \"Final\"", "\"name\": \"F\"");
    match accept_submission(&payload) {
        Err(SubmissionError::Rejected(report)) => {
            assert_eq!(report.get("name"), Some(&ValidationError::TooShort { min: 3 }));
            assert_eq!(report.get("description"), Some(&ValidationError::Required));
            assert_eq!(report.get("rounds.1.name"), Some(&ValidationError::TooShort { min: 3 }));
            assert_eq!(report.len(), 3);
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn missing_description_is_rejected() {
    let payload = VALID_PAYLOAD.replace("\"description\": \"Two rounds, sixteen players\",", "");
    match accept_submission(&payload) {
        Err(SubmissionError::Rejected(report)) => {
            assert_eq!(report.get("description"), Some(&ValidationError::Required));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn round_errors_use_submitted_field_names() {
    let payload = VALID_PAYLOAD
        .replace("\"matchCount\": 6", "\"matchCount\": 0")
        .replace("\"playerAdvancementCount\": 2", "\"playerAdvancementCount\": 4")
        .replace("\"concurrentGroupCount\": 2", "\"concurrentGroupCount\": 5");
    match accept_submission(&payload) {
        Err(SubmissionError::Rejected(report)) => {
            assert_eq!(report.get("rounds.0.matchCount"), Some(&ValidationError::NotPositive));
            assert_eq!(
                report.get("rounds.0.playerAdvancementCount"),
                Some(&ValidationError::OutOfRange { min: 1, max: 3 })
            );
            assert_eq!(
                report.get("rounds.0.concurrentGroupCount"),
                Some(&ValidationError::ExceedsGroupCount { group_count: 4 })
            );
            assert!(report.get("rounds.0.matchesPerGroup").is_none());
            assert!(report.get("rounds.0.advancingPlayersPerGroup").is_none());
            assert!(report.get("rounds.0.concurrentGroups").is_none());
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn tournament_name_is_trimmed_in_both_directions() {
    let payload = VALID_PAYLOAD.replace("\"Autumn League\"", "\"  Autumn League \"");
    let submitted = parse_submission(&payload).unwrap();
    let plan = TournamentPlan::from(&submitted);
    assert_eq!(plan.name, "Autumn League");

    let back = SubmittedTournament::from(&plan);
    assert_eq!(back.name, "Autumn League");
    assert_eq!(TournamentPlan::from(&back), plan);
}
