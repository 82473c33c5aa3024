//! Tournament planner: library with plan models, planning logic and the web API.

pub mod api;
pub mod logic;
pub mod models;
pub mod session;
pub mod store;

pub use logic::{
    accept_submission, add_round, apply_edit, check_submission, derive_group_counts, next_round,
    parse_submission, phases_to_csv, project_phases, remove_round, round_robin_matches,
    validate_plan, ExportError, PlanEdit,
};
pub use models::{
    PhaseSummary, RoundSpec, SubmissionError, SubmittedRound, SubmittedTournament,
    TournamentPlan, TournamentStatus, ValidationError, ValidationReport,
};
pub use session::PlanSession;
pub use store::{
    InMemoryTournamentStore, StoreError, StoredTournament, TournamentId, TournamentIndexEntry,
    TournamentStore,
};
