//! Validation results and submission errors.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Error path for structural problems of the round sequence as a whole.
pub const ROUNDS_PATH: &str = "rounds";

/// Minimum length of the tournament name, description and round names.
pub const MIN_TEXT_LEN: usize = 3;

/// Maximum length of the tournament name and description.
pub const MAX_TEXT_LEN: usize = 255;

/// A single validation problem. Field-level kinds are shown next to the offending input;
/// structural kinds are reported once under [`ROUNDS_PATH`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// Required value is empty.
    Required,
    /// Text shorter than allowed.
    TooShort { min: usize },
    /// Text longer than allowed.
    TooLong { max: usize },
    /// Date string is not `YYYY-MM-DD`.
    InvalidDate,
    /// End date lies before the start date.
    EndBeforeStart,
    /// Must be greater than zero.
    NotPositive,
    /// Must be at least `min`.
    BelowMinimum { min: u32 },
    /// Must lie in `min..=max`.
    OutOfRange { min: u32, max: u32 },
    /// Concurrent groups larger than the round's group count.
    ExceedsGroupCount { group_count: u32 },
    /// Tournament has no rounds.
    NoRounds,
    /// Final round does not converge into a single group.
    FinalRoundNotSingleGroup { group_count: u32 },
    /// Round `round` seats a different number of players than arrive at it.
    ChainMismatch { round: usize, expected: u64, actual: u64 },
    /// More players advance from round `round` than each group holds.
    AdvancementExceedsGroupSize { round: usize },
}

impl ValidationError {
    /// Whether this concerns the round sequence as a whole rather than one field.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ValidationError::FinalRoundNotSingleGroup { .. }
                | ValidationError::ChainMismatch { .. }
                | ValidationError::AdvancementExceedsGroupSize { .. }
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "This field is required"),
            ValidationError::TooShort { min } => write!(f, "Must be at least {} characters", min),
            ValidationError::TooLong { max } => write!(f, "Must be at most {} characters", max),
            ValidationError::InvalidDate => write!(f, "Not a valid date (expected YYYY-MM-DD)"),
            ValidationError::EndBeforeStart => write!(f, "End date must be after start date"),
            ValidationError::NotPositive => write!(f, "Must be greater than 0"),
            ValidationError::BelowMinimum { min } => write!(f, "Must be at least {}", min),
            ValidationError::OutOfRange { min, max } if min > max => {
                write!(f, "No valid value: group size leaves no room for advancing players")
            }
            ValidationError::OutOfRange { min, max } => {
                write!(f, "Must be between {} and {}", min, max)
            }
            ValidationError::ExceedsGroupCount { group_count } => write!(
                f,
                "Concurrent groups cannot exceed the total number of groups ({})",
                group_count
            ),
            ValidationError::NoRounds => write!(f, "Tournament must have at least one round"),
            ValidationError::FinalRoundNotSingleGroup { group_count } => write!(
                f,
                "Invalid tournament structure: the last round must have exactly one group (has {})",
                group_count
            ),
            ValidationError::ChainMismatch { round, expected, actual } => write!(
                f,
                "Invalid tournament structure: round {} seats {} players but {} arrive",
                round + 1,
                actual,
                expected
            ),
            ValidationError::AdvancementExceedsGroupSize { round } => write!(
                f,
                "Invalid tournament structure: round {} advances more players than a group holds",
                round + 1
            ),
        }
    }
}

/// Outcome of validating a plan: field path (e.g. `rounds.1.concurrentGroups`) to error.
/// Only the first error per path is kept.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationReport {
    errors: BTreeMap<String, ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless the path already has one.
    pub fn push(&mut self, path: impl Into<String>, error: ValidationError) {
        self.errors.entry(path.into()).or_insert(error);
    }

    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&ValidationError> {
        self.errors.get(path)
    }

    pub fn errors(&self) -> &BTreeMap<String, ValidationError> {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The aggregate structural error, if any.
    pub fn structural(&self) -> Option<&ValidationError> {
        self.errors.get(ROUNDS_PATH).filter(|e| e.is_structural())
    }

    /// Rewrite every path with `rename`, e.g. to the field names of another input shape.
    /// If two paths collapse into one, the first error is kept.
    pub fn rename_paths(self, rename: impl Fn(&str) -> String) -> Self {
        let mut renamed = Self::new();
        for (path, error) in self.errors {
            renamed.push(rename(&path), error);
        }
        renamed
    }

    /// Path to message, as rendered inline by a form.
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(path, error)| (path.clone(), error.to_string()))
            .collect()
    }
}

/// Serializes as `{ "valid": bool, "errors": { path: message } }`.
impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Messages<'a>(&'a BTreeMap<String, ValidationError>);

        impl Serialize for Messages<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (path, error) in self.0 {
                    map.serialize_entry(path, &error.to_string())?;
                }
                map.end()
            }
        }

        let mut state = serializer.serialize_struct("ValidationReport", 2)?;
        state.serialize_field("valid", &self.valid())?;
        state.serialize_field("errors", &Messages(&self.errors))?;
        state.end()
    }
}

/// Errors of the submission gate. Only `MissingPayload` and `MalformedPayload` are fatal;
/// `Rejected` carries the full report for inline display.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionError {
    /// No payload, or only whitespace.
    MissingPayload,
    /// Payload is not a well-formed tournament submission.
    MalformedPayload(String),
    /// Payload parsed but the plan failed validation.
    Rejected(ValidationReport),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::MissingPayload => write!(f, "Missing or invalid payload"),
            SubmissionError::MalformedPayload(reason) => {
                write!(f, "Invalid payload: unable to parse JSON ({})", reason)
            }
            SubmissionError::Rejected(report) => write!(
                f,
                "Please fix the validation errors before submitting ({} error(s))",
                report.len()
            ),
        }
    }
}

impl std::error::Error for SubmissionError {}
