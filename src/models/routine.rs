//! Student routine: the planner's input.
//!
//! Built by the onboarding wizard (outside this crate) or deserialized from
//! JSON. Read-only to the planner.

use serde::{Deserialize, Serialize};

use super::{DayMinute, SubjectInput};

/// Whether the student attends school during the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentType {
    /// Attends school; school hours are a fixed block.
    Regular,
    /// Enrolled without attending; no school block.
    #[default]
    Dummy,
}

/// Class tier. Every tier above `Lower` attends coaching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassType {
    #[default]
    Lower,
    Upper,
    Dropper,
}

impl ClassType {
    /// Whether students of this tier attend coaching.
    #[inline]
    pub fn has_coaching(self) -> bool {
        !matches!(self, ClassType::Lower)
    }
}

/// Whole-hour range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    /// First hour (0..24).
    pub start: u32,
    /// Hour after the last (1..=24).
    pub end: u32,
}

impl HourRange {
    /// Creates a new hour range.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether the range is non-empty and within one day.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end && self.end <= 24
    }

    /// Range as day minutes.
    #[inline]
    pub fn to_minutes(self) -> (DayMinute, DayMinute) {
        (self.start * 60, self.end * 60)
    }
}

/// A student's daily routine and study request.
///
/// # Example
///
/// ```
/// use study_schedule::models::{ClassType, HourRange, Routine, StudentType, SubjectInput};
///
/// let routine = Routine::new("06:00", "23:00")
///     .with_student_type(StudentType::Regular)
///     .with_school_hours(HourRange::new(8, 14))
///     .with_class_type(ClassType::Upper)
///     .with_coaching_hours(HourRange::new(16, 19))
///     .with_subject(SubjectInput::hard("Physics"))
///     .with_subject(SubjectInput::medium("Chemistry"))
///     .with_total_study_minutes(240);
/// assert_eq!(routine.subjects.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    /// Regular or dummy school attendance.
    #[serde(default)]
    pub student_type: StudentType,
    /// Class tier.
    #[serde(default)]
    pub class_type: ClassType,
    /// Wake time, `HH:MM`.
    pub wake_time: String,
    /// Sleep time, `HH:MM`. At or before `wake_time` means after midnight.
    pub sleep_time: String,
    /// School hours, consulted only for regular students.
    pub school_hours: HourRange,
    /// Coaching hours, consulted only for tiers with coaching.
    pub coaching_hours: HourRange,
    /// Subjects in the order they should be studied.
    pub subjects: Vec<SubjectInput>,
    /// Total study minutes requested.
    pub total_study_minutes: u32,
    /// Short break length in minutes.
    pub break_minutes: u32,
    /// Every n-th placed unit is followed by a long (double) break.
    pub long_break_every: u32,
}

impl Routine {
    /// Creates a routine with the given wake and sleep times.
    ///
    /// Defaults: dummy student in the lower tier (no school or coaching),
    /// no subjects, two hours of study, 15-minute breaks, a long break
    /// after every third unit.
    pub fn new(wake_time: impl Into<String>, sleep_time: impl Into<String>) -> Self {
        Self {
            student_type: StudentType::default(),
            class_type: ClassType::default(),
            wake_time: wake_time.into(),
            sleep_time: sleep_time.into(),
            school_hours: HourRange::new(8, 14),
            coaching_hours: HourRange::new(16, 19),
            subjects: Vec::new(),
            total_study_minutes: 120,
            break_minutes: 15,
            long_break_every: 3,
        }
    }

    /// Sets the student type.
    pub fn with_student_type(mut self, student_type: StudentType) -> Self {
        self.student_type = student_type;
        self
    }

    /// Sets the class tier.
    pub fn with_class_type(mut self, class_type: ClassType) -> Self {
        self.class_type = class_type;
        self
    }

    /// Sets school hours.
    pub fn with_school_hours(mut self, hours: HourRange) -> Self {
        self.school_hours = hours;
        self
    }

    /// Sets coaching hours.
    pub fn with_coaching_hours(mut self, hours: HourRange) -> Self {
        self.coaching_hours = hours;
        self
    }

    /// Appends a subject.
    pub fn with_subject(mut self, subject: SubjectInput) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Replaces the subject list.
    pub fn with_subjects(mut self, subjects: Vec<SubjectInput>) -> Self {
        self.subjects = subjects;
        self
    }

    /// Sets total requested study minutes.
    pub fn with_total_study_minutes(mut self, minutes: u32) -> Self {
        self.total_study_minutes = minutes;
        self
    }

    /// Sets the short break length and long-break period.
    pub fn with_breaks(mut self, break_minutes: u32, long_break_every: u32) -> Self {
        self.break_minutes = break_minutes;
        self.long_break_every = long_break_every;
        self
    }

    /// Whether the school block applies.
    #[inline]
    pub fn attends_school(&self) -> bool {
        self.student_type == StudentType::Regular
    }

    /// Whether the coaching block applies.
    #[inline]
    pub fn attends_coaching(&self) -> bool {
        self.class_type.has_coaching()
    }
}
