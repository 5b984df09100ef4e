//! Final schedule assembly.
//!
//! Merges fixed and placed intervals, orders them along the day line and
//! wraps their bounds back onto the 24-hour clock. An interval that runs
//! past midnight is flagged instead of split, so a renderer can show one
//! wrap-around span such as `"11:00 PM – 6:00 AM"`.

use crate::models::{
    format_clock, DayMinute, Interval, ScheduleEntry, ScheduleResult, StudyUnit, MINUTES_PER_DAY,
};

/// Builds the immutable [`ScheduleResult`].
///
/// Fixed intervals come before placed ones at equal start times; the sort is
/// stable, so ties keep that order.
pub fn assemble(
    fixed: &[Interval],
    placed: Vec<Interval>,
    pending: Vec<StudyUnit>,
    allocated_minutes: DayMinute,
) -> ScheduleResult {
    let mut intervals: Vec<Interval> = Vec::with_capacity(fixed.len() + placed.len());
    intervals.extend_from_slice(fixed);
    intervals.extend(placed);
    intervals.sort_by_key(|i| i.start);

    let entries = intervals.into_iter().map(to_entry).collect();

    ScheduleResult {
        entries,
        incomplete: !pending.is_empty(),
        unplaced: pending,
        allocated_minutes,
    }
}

fn to_entry(interval: Interval) -> ScheduleEntry {
    let start = interval.start % MINUTES_PER_DAY;
    let end = interval.end % MINUTES_PER_DAY;
    ScheduleEntry {
        start,
        end,
        line_start: interval.start,
        line_end: interval.end,
        start_label: format_clock(start),
        end_label: format_clock(end),
        activity_label: interval.label,
        kind: interval.kind,
        subject_name: interval.subject_name,
        crosses_midnight: interval.end > MINUTES_PER_DAY,
    }
}
