//! Subject and study-unit models.
//!
//! A [`SubjectInput`] is what the student asks to study; a [`StudyUnit`] is
//! the contiguous block of minutes the allocator grants it.

use serde::{Deserialize, Serialize};

use super::DayMinute;

/// Self-assessed subject difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Allocation weight in half-units (easy=1, medium=1.5, hard=2 doubled).
    ///
    /// Kept integral so proportional splits are exact.
    #[inline]
    pub fn half_weight(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

/// A subject the student wants to study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInput {
    /// Subject name (non-empty, at most 40 characters).
    pub name: String,
    /// Difficulty, drives the time share.
    pub difficulty: Difficulty,
}

impl SubjectInput {
    /// Creates a new subject.
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }

    /// Creates an easy subject.
    pub fn easy(name: impl Into<String>) -> Self {
        Self::new(name, Difficulty::Easy)
    }

    /// Creates a medium subject.
    pub fn medium(name: impl Into<String>) -> Self {
        Self::new(name, Difficulty::Medium)
    }

    /// Creates a hard subject.
    pub fn hard(name: impl Into<String>) -> Self {
        Self::new(name, Difficulty::Hard)
    }
}

/// One subject's allocated, not-yet-placed study block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyUnit {
    /// Subject this unit belongs to.
    pub subject_name: String,
    /// Contiguous minutes to place.
    pub allocated_minutes: DayMinute,
}

impl StudyUnit {
    /// Creates a new study unit.
    pub fn new(subject_name: impl Into<String>, allocated_minutes: DayMinute) -> Self {
        Self {
            subject_name: subject_name.into(),
            allocated_minutes,
        }
    }
}
