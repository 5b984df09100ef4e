//! Schedule (result) model.
//!
//! A [`ScheduleResult`] is the finished, time-ordered day plan: every fixed
//! obligation plus every placed study unit and break, wrapped back onto the
//! 24-hour clock and labelled for display. It is built once by the
//! assembler and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{DayMinute, IntervalKind, StudyUnit};

/// One row of the finished schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Start on the 24-hour clock, `[0, 1440)`.
    pub start: DayMinute,
    /// End on the 24-hour clock, `[0, 1440)`.
    pub end: DayMinute,
    /// Start on the monotonic day line (before wrapping).
    pub line_start: DayMinute,
    /// End on the monotonic day line (before wrapping).
    pub line_end: DayMinute,
    /// Rendered start, e.g. `"11:00 PM"`.
    pub start_label: String,
    /// Rendered end, e.g. `"6:00 AM"`.
    pub end_label: String,
    /// What the student does, e.g. `"Lunch"` or a subject name.
    pub activity_label: String,
    /// Entry kind.
    pub kind: IntervalKind,
    /// Subject studied, for study entries.
    pub subject_name: Option<String>,
    /// Whether the entry runs past midnight of the scheduling day.
    pub crosses_midnight: bool,
}

impl ScheduleEntry {
    /// Duration in minutes.
    #[inline]
    pub fn duration(&self) -> DayMinute {
        self.line_end - self.line_start
    }

    /// Whether two entries overlap on the day line.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.line_start < other.line_end && other.line_start < self.line_end
    }

    /// Display span such as `"11:00 PM – 6:00 AM"`.
    pub fn span_label(&self) -> String {
        format!("{} – {}", self.start_label, self.end_label)
    }
}

/// The finished day plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Entries ordered by start on the day line.
    pub entries: Vec<ScheduleEntry>,
    /// Whether some study units could not be placed.
    pub incomplete: bool,
    /// Units left unplaced, in their original order.
    pub unplaced: Vec<StudyUnit>,
    /// Study minutes granted by the allocator (placed or not).
    pub allocated_minutes: DayMinute,
}

impl ScheduleResult {
    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether every allocated unit was placed.
    pub fn is_complete(&self) -> bool {
        !self.incomplete
    }

    /// Entries of one kind, in order.
    pub fn entries_of_kind(&self, kind: IntervalKind) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.kind == kind).collect()
    }

    /// The study entry for a subject, if placed.
    pub fn entry_for_subject(&self, subject: &str) -> Option<&ScheduleEntry> {
        self.entries
            .iter()
            .find(|e| e.kind == IntervalKind::Study && e.subject_name.as_deref() == Some(subject))
    }

    /// Total minutes of one kind.
    pub fn minutes_of_kind(&self, kind: IntervalKind) -> DayMinute {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(ScheduleEntry::duration)
            .sum()
    }

    /// Total placed study minutes.
    pub fn study_minutes(&self) -> DayMinute {
        self.minutes_of_kind(IntervalKind::Study)
    }

    /// Placed study minutes per subject.
    pub fn study_minutes_by_subject(&self) -> HashMap<String, DayMinute> {
        let mut by_subject = HashMap::new();
        for e in &self.entries {
            if let (IntervalKind::Study, Some(name)) = (e.kind, &e.subject_name) {
                *by_subject.entry(name.clone()).or_insert(0) += e.duration();
            }
        }
        by_subject
    }

    /// The break that starts exactly where entry `index` ends, if any.
    pub fn break_after(&self, index: usize) -> Option<&ScheduleEntry> {
        let current = self.entries.get(index)?;
        self.entries
            .iter()
            .find(|e| e.kind == IntervalKind::Break && e.line_start == current.line_end)
    }

    /// Pairs of constrained entries that overlap. Empty for a valid plan.
    pub fn conflicts(&self) -> Vec<(&ScheduleEntry, &ScheduleEntry)> {
        let constrained: Vec<&ScheduleEntry> = self
            .entries
            .iter()
            .filter(|e| e.kind.is_constrained())
            .collect();

        let mut conflicts = Vec::new();
        for (i, a) in constrained.iter().enumerate() {
            for b in &constrained[i + 1..] {
                if a.overlaps(b) {
                    conflicts.push((*a, *b));
                }
            }
        }
        conflicts
    }
}
