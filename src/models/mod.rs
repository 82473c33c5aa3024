//! Data structures for tournament planning: plan, rounds, phase summaries, status, validation.

mod plan;
mod status;
mod submission;
mod summary;
mod validation;

pub use plan::{RoundSpec, TournamentPlan, DEFAULT_GROUP_PHASE_SIZE, DEFAULT_PLAYERS_PER_GROUP};
pub use status::TournamentStatus;
pub use submission::{SubmittedRound, SubmittedTournament};
pub use summary::{PhaseSummary, GROUP_PHASE_NAME};
pub use validation::{
    SubmissionError, ValidationError, ValidationReport, MAX_TEXT_LEN, MIN_TEXT_LEN, ROUNDS_PATH,
};
