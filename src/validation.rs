//! Input validation for study routines.
//!
//! Checks the routine before any planning work starts. Detects:
//! - Empty or oversized subject lists
//! - Blank, over-long, or duplicate subject names
//! - Study and break lengths outside the accepted ranges
//! - A zero long-break period
//! - Malformed school or coaching hours (only when they apply)
//!
//! All problems are collected so the caller can re-prompt once.
//! Wall-clock strings are checked by the time codec, not here.

use std::collections::HashSet;

use thiserror::Error;

use crate::config::InputLimits;
use crate::models::{HourRange, Routine};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No subjects were given.
    EmptySubjectList,
    /// More subjects than the planner accepts.
    TooManySubjects,
    /// A subject name is blank or too long.
    InvalidSubjectName,
    /// Two subjects share a name.
    DuplicateSubject,
    /// Total study time outside the accepted range.
    StudyTimeOutOfRange,
    /// Short break outside the accepted range.
    BreakOutOfRange,
    /// Long-break period is zero.
    InvalidLongBreakPeriod,
    /// School or coaching hours are empty or reversed.
    InvalidHourRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a routine against the configured limits.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_routine(routine: &Routine, limits: &InputLimits) -> ValidationResult {
    let mut errors = Vec::new();

    if routine.subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySubjectList,
            "At least one subject is required",
        ));
    }
    if routine.subjects.len() > limits.max_subjects {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManySubjects,
            format!(
                "{} subjects given, at most {} allowed",
                routine.subjects.len(),
                limits.max_subjects
            ),
        ));
    }

    let mut names = HashSet::new();
    for subject in &routine.subjects {
        let name = subject.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSubjectName,
                "Subject name must not be empty",
            ));
            continue;
        }
        if name.chars().count() > limits.max_subject_name_len {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSubjectName,
                format!(
                    "Subject name '{name}' exceeds {} characters",
                    limits.max_subject_name_len
                ),
            ));
        }
        if !names.insert(name.to_lowercase()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSubject,
                format!("Duplicate subject: {name}"),
            ));
        }
    }

    if !(limits.min_study_minutes..=limits.max_study_minutes).contains(&routine.total_study_minutes) {
        errors.push(ValidationError::new(
            ValidationErrorKind::StudyTimeOutOfRange,
            format!(
                "Total study time {} min outside {}..={} min",
                routine.total_study_minutes, limits.min_study_minutes, limits.max_study_minutes
            ),
        ));
    }

    if !(limits.min_break_minutes..=limits.max_break_minutes).contains(&routine.break_minutes) {
        errors.push(ValidationError::new(
            ValidationErrorKind::BreakOutOfRange,
            format!(
                "Break length {} min outside {}..={} min",
                routine.break_minutes, limits.min_break_minutes, limits.max_break_minutes
            ),
        ));
    }

    if routine.long_break_every == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidLongBreakPeriod,
            "Long break period must be at least 1",
        ));
    }

    if routine.attends_school() {
        check_hours("School", routine.school_hours, &mut errors);
    }
    if routine.attends_coaching() {
        check_hours("Coaching", routine.coaching_hours, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_hours(what: &str, hours: HourRange, errors: &mut Vec<ValidationError>) {
    if !hours.is_well_formed() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidHourRange,
            format!("{what} hours {}..{} are not a valid range", hours.start, hours.end),
        ));
    }
}
