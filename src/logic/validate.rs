//! Structure validation: field bounds, final-round convergence and the advancement chain.

use crate::models::{
    RoundSpec, TournamentPlan, ValidationError, ValidationReport, MAX_TEXT_LEN, MIN_TEXT_LEN,
    ROUNDS_PATH,
};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a plan without modifying it. Every check runs; the report holds all failures.
///
/// Field-level errors are keyed by path (`name`, `rounds.1.advancingPlayersPerGroup`, ...).
/// Structural problems (last round not a single group, broken advancement chain) are
/// reported once under `rounds`.
pub fn validate_plan(plan: &TournamentPlan) -> ValidationReport {
    let mut report = ValidationReport::new();

    check_details(plan, &mut report);

    if plan.rounds.is_empty() {
        report.push(ROUNDS_PATH, ValidationError::NoRounds);
        return report;
    }
    for (index, round) in plan.rounds.iter().enumerate() {
        check_round(index, round, &mut report);
    }
    if let Some(error) = structure_error(plan) {
        report.push(ROUNDS_PATH, error);
    }

    if !report.valid() {
        log::debug!("Plan {:?} failed validation: {:?}", plan.name, report.messages());
    }
    report
}

/// Name, description, dates, player count and group phase settings.
fn check_details(plan: &TournamentPlan, report: &mut ValidationReport) {
    check_text("name", &plan.name, report);
    check_text("description", &plan.description, report);

    let start = parse_date("startDate", &plan.start_date, report);
    let end = parse_date("endDate", &plan.end_date, report);
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            report.push("endDate", ValidationError::EndBeforeStart);
        }
    }

    if plan.player_count == 0 {
        report.push("playerCount", ValidationError::NotPositive);
    }
    if plan.group_phase_enabled && plan.group_phase_size < 2 {
        report.push("groupPhaseSize", ValidationError::BelowMinimum { min: 2 });
    }
}

/// Required text of `MIN_TEXT_LEN..=MAX_TEXT_LEN` characters, surrounding whitespace ignored.
fn check_text(path: &str, value: &str, report: &mut ValidationReport) {
    let length = value.trim().chars().count();
    if length == 0 {
        report.push(path, ValidationError::Required);
    } else if length < MIN_TEXT_LEN {
        report.push(path, ValidationError::TooShort { min: MIN_TEXT_LEN });
    } else if length > MAX_TEXT_LEN {
        report.push(path, ValidationError::TooLong { max: MAX_TEXT_LEN });
    }
}

fn parse_date(path: &str, value: &str, report: &mut ValidationReport) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        report.push(path, ValidationError::Required);
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            report.push(path, ValidationError::InvalidDate);
            None
        }
    }
}

/// Bounds of a single round.
fn check_round(index: usize, round: &RoundSpec, report: &mut ValidationReport) {
    let path = |field: &str| format!("{}.{}.{}", ROUNDS_PATH, index, field);

    check_text(&path("name"), &round.name, report);
    if round.group_count == 0 {
        report.push(path("groupCount"), ValidationError::NotPositive);
    }
    if round.players_per_group < 2 {
        report.push(path("playersPerGroup"), ValidationError::BelowMinimum { min: 2 });
    }
    if round.matches_per_group == 0 {
        report.push(path("matchesPerGroup"), ValidationError::NotPositive);
    }
    let advancing = round.advancing_players_per_group;
    if advancing == 0 || advancing >= round.players_per_group {
        report.push(
            path("advancingPlayersPerGroup"),
            ValidationError::OutOfRange {
                min: 1,
                max: round.players_per_group.saturating_sub(1),
            },
        );
    }
    if round.concurrent_groups == 0 {
        report.push(path("concurrentGroups"), ValidationError::BelowMinimum { min: 1 });
    } else if round.concurrent_groups > round.group_count {
        report.push(
            path("concurrentGroups"),
            ValidationError::ExceedsGroupCount {
                group_count: round.group_count,
            },
        );
    }
}

/// First structural problem of the round sequence, if any. `rounds` must be non-empty.
fn structure_error(plan: &TournamentPlan) -> Option<ValidationError> {
    let last = plan.rounds.last()?;
    if last.group_count != 1 {
        return Some(ValidationError::FinalRoundNotSingleGroup {
            group_count: last.group_count,
        });
    }

    let mut arriving = plan.first_round_entrants();
    for (index, round) in plan.rounds.iter().enumerate() {
        if !plan.allow_underfilled_groups && round.capacity() != arriving {
            return Some(ValidationError::ChainMismatch {
                round: index,
                expected: arriving,
                actual: round.capacity(),
            });
        }
        if round.advancing_players_per_group > round.players_per_group {
            return Some(ValidationError::AdvancementExceedsGroupSize { round: index });
        }
        arriving = round.advancing_total();
    }
    None
}
