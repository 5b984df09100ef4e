//! Timeline intervals.
//!
//! An [`Interval`] is a half-open span `[start, end)` on the day-minute line
//! tagged with what occupies it. Fixed obligations and placed study work
//! share this one representation.

use serde::{Deserialize, Serialize};

use super::DayMinute;

/// What occupies an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalKind {
    /// Night sleep (always present).
    Sleep,
    /// School hours.
    School,
    /// Coaching class hours.
    Coaching,
    /// Breakfast, lunch or dinner.
    Meal,
    /// A placed study unit.
    Study,
    /// A rest break following a study unit.
    Break,
}

impl IntervalKind {
    /// Whether intervals of this kind must never overlap one another.
    ///
    /// Breaks are soft and may overlap a meal.
    #[inline]
    pub fn is_constrained(self) -> bool {
        !matches!(self, IntervalKind::Break)
    }

    /// Whether this kind is a fixed obligation rather than placed work.
    #[inline]
    pub fn is_fixed(self) -> bool {
        matches!(
            self,
            IntervalKind::Sleep | IntervalKind::School | IntervalKind::Coaching | IntervalKind::Meal
        )
    }
}

/// A labelled time interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Interval start (inclusive).
    pub start: DayMinute,
    /// Interval end (exclusive). May exceed 1440 before final wrap.
    pub end: DayMinute,
    /// What occupies the interval.
    pub kind: IntervalKind,
    /// Human-readable activity label.
    pub label: String,
    /// Subject studied, for study intervals.
    pub subject_name: Option<String>,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(start: DayMinute, end: DayMinute, kind: IntervalKind, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            kind,
            label: label.into(),
            subject_name: None,
        }
    }

    /// Creates a study interval for a subject.
    pub fn study(start: DayMinute, end: DayMinute, subject: impl Into<String>) -> Self {
        let subject = subject.into();
        Self {
            start,
            end,
            kind: IntervalKind::Study,
            label: subject.clone(),
            subject_name: Some(subject),
        }
    }

    /// Duration in minutes.
    #[inline]
    pub fn duration(&self) -> DayMinute {
        self.end.saturating_sub(self.start)
    }

    /// Whether a minute falls within this interval.
    #[inline]
    pub fn contains(&self, minute: DayMinute) -> bool {
        minute >= self.start && minute < self.end
    }

    /// Whether two intervals overlap. Touching intervals do not.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.overlaps_span(other.start, other.end)
    }

    /// Whether this interval overlaps the span `[start, end)`.
    #[inline]
    pub fn overlaps_span(&self, start: DayMinute, end: DayMinute) -> bool {
        self.start < end && start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_basics() {
        let i = Interval::new(100, 200, IntervalKind::Meal, "Lunch");
        assert_eq!(i.duration(), 100);
        assert!(i.contains(100));
        assert!(i.contains(199));
        assert!(!i.contains(200)); // exclusive end
        assert!(!i.contains(50));
        assert!(i.subject_name.is_none());
    }

    #[test]
    fn test_interval_overlap() {
        let a = Interval::new(0, 100, IntervalKind::School, "School");
        let b = Interval::new(50, 150, IntervalKind::Coaching, "Coaching");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = Interval::new(100, 200, IntervalKind::Meal, "Lunch"); // touching
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_study_interval() {
        let s = Interval::study(480, 600, "Physics");
        assert_eq!(s.kind, IntervalKind::Study);
        assert_eq!(s.label, "Physics");
        assert_eq!(s.subject_name.as_deref(), Some("Physics"));
    }

    #[test]
    fn test_kind_flags() {
        assert!(IntervalKind::Sleep.is_constrained());
        assert!(IntervalKind::Study.is_constrained());
        assert!(!IntervalKind::Break.is_constrained());
        assert!(IntervalKind::Meal.is_fixed());
        assert!(!IntervalKind::Study.is_fixed());
    }
}
