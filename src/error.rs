//! Error types for study planning.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors that can occur while building a study schedule.
///
/// Placement shortfalls are not errors: a schedule that could not fit every
/// study unit is returned with
/// [`ScheduleResult::incomplete`](crate::models::ScheduleResult::incomplete) set.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A wall-clock field is not a valid `HH:MM` string.
    #[error("invalid time format for {field}: {value:?} (expected HH:MM)")]
    InvalidTimeFormat { field: String, value: String },

    /// Two fixed obligations claim the same time.
    #[error("fixed blocks overlap: {first} and {second}")]
    OverlappingFixedBlocks { first: String, second: String },

    /// Requested study time exceeds the free time left by fixed blocks.
    #[error("requested study time exceeds available time by {shortfall_minutes} minutes")]
    Infeasible { shortfall_minutes: u32 },

    /// The routine failed input validation.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Planner configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl PlanError {
    /// Short error code string for callers that surface errors over an API.
    pub fn code(&self) -> &'static str {
        match self {
            PlanError::InvalidTimeFormat { .. } => "INVALID_TIME_FORMAT",
            PlanError::OverlappingFixedBlocks { .. } => "OVERLAPPING_FIXED_BLOCKS",
            PlanError::Infeasible { .. } => "INFEASIBLE_SCHEDULE",
            PlanError::InvalidInput(_) => "INVALID_INPUT",
            PlanError::Config(_) => "CONFIG_ERROR",
        }
    }

    pub(crate) fn invalid_time(field: &str, value: &str) -> Self {
        PlanError::InvalidTimeFormat {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn overlap(first: impl Into<String>, second: impl Into<String>) -> Self {
        PlanError::OverlappingFixedBlocks {
            first: first.into(),
            second: second.into(),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
