//! Tournament planning logic: group derivation, rounds, validation, phase preview, submission.

mod edit;
mod export;
mod group_counts;
mod round_robin;
mod rounds;
mod submission;
mod validate;
mod visualize;

pub use edit::{apply_edit, PlanEdit};
pub use export::{phases_to_csv, ExportError};
pub use group_counts::derive_group_counts;
pub use round_robin::round_robin_matches;
pub use rounds::{add_round, next_round, remove_round};
pub use submission::{accept_submission, check_submission, parse_submission};
pub use validate::validate_plan;
pub use visualize::project_phases;
