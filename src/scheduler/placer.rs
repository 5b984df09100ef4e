//! Greedy study-unit placement.
//!
//! # Algorithm
//!
//! A single cursor `t` walks the day line from wake toward sleep:
//!
//! 1. If `t` is inside an occupied interval, step by the granularity.
//! 2. Otherwise test the whole span `[t, t + d)` of the head unit (FIFO,
//!    never reordered) against every occupied interval and the sleep time.
//! 3. If the span is free, place the unit, advance past it, and place the
//!    break chosen by the [`BreakPolicy`]. If that break would run into
//!    sleep, the unit was the last one of the day and the walk stops.
//! 4. If not, step by the granularity and retry the same unit.
//!
//! The walk never moves backward and ends at the sleep time. Units still
//! pending at that point make the outcome incomplete; nothing is split,
//! reordered, or retried.
//!
//! Breaks are laid down without a conflict check and may overlap a meal.
//!
//! # Complexity
//! O(s · log k) where s = scan steps (≤ 1440 / granularity) and k =
//! occupied spans; each probe is a binary search in [`Occupancy`].

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::BreakPolicy;
use crate::models::{DayFrame, DayMinute, Interval, IntervalKind, Occupancy, StudyUnit};

/// Result of a placement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Placed study and break intervals in placement order.
    pub placed: Vec<Interval>,
    /// Units that did not fit, in their original order.
    pub pending: Vec<StudyUnit>,
}

impl PlacementOutcome {
    /// Whether any unit was left unplaced.
    #[inline]
    pub fn is_incomplete(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of placed study units.
    pub fn placed_units(&self) -> usize {
        self.placed
            .iter()
            .filter(|i| i.kind == IntervalKind::Study)
            .count()
    }
}

/// Greedy placer over one day.
///
/// Owns its working state exclusively; a caller only ever sees the finished
/// [`PlacementOutcome`].
///
/// # Example
///
/// ```
/// use study_schedule::models::{DayFrame, StudyUnit};
/// use study_schedule::scheduler::{BreakPolicy, GreedyPlacer};
///
/// let frame = DayFrame::parse("08:00", "12:00").unwrap();
/// let units = vec![StudyUnit::new("Maths", 60), StudyUnit::new("Art", 30)];
/// let outcome = GreedyPlacer::new(frame, BreakPolicy::new(10, 2), 15).place(&[], units);
/// assert!(!outcome.is_incomplete());
/// assert_eq!(outcome.placed[0].start, 480);
/// assert_eq!(outcome.placed[2].start, 550); // Art after a 10-minute break
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlacer {
    frame: DayFrame,
    policy: BreakPolicy,
    granularity: DayMinute,
}

impl GreedyPlacer {
    /// Creates a placer for the given awake window.
    pub fn new(frame: DayFrame, policy: BreakPolicy, granularity: DayMinute) -> Self {
        Self {
            frame,
            policy,
            granularity: granularity.max(1),
        }
    }

    /// Places `units` around the `fixed` intervals.
    pub fn place(&self, fixed: &[Interval], units: Vec<StudyUnit>) -> PlacementOutcome {
        let mut occupancy = Occupancy::from_intervals(fixed);
        let mut queue: VecDeque<StudyUnit> = units.into();
        let mut placed = Vec::with_capacity(queue.len() * 2);
        let mut placed_count: u32 = 0;
        debug!(
            units = queue.len(),
            blocked_spans = occupancy.span_count(),
            blocked_minutes = occupancy.occupied_minutes(),
            "placing study units"
        );

        let sleep = self.frame.sleep_absolute;
        let mut t = self.frame.wake;

        while t < sleep {
            let Some(unit) = queue.front() else {
                break;
            };

            if occupancy.is_occupied(t) {
                t += self.granularity;
                continue;
            }

            let end = t + unit.allocated_minutes;
            if end > sleep || !occupancy.is_free(t, end) {
                trace!(subject = %unit.subject_name, t, end, "span blocked, stepping");
                t += self.granularity;
                continue;
            }

            let Some(unit) = queue.pop_front() else {
                break;
            };
            debug!(subject = %unit.subject_name, start = t, end, "placed study unit");
            occupancy.insert(t, end);
            placed.push(Interval::study(t, end, unit.subject_name));
            placed_count += 1;
            t = end;

            let length = self.policy.after(placed_count);
            if t + length > sleep {
                // No room for the break: this was the last unit before sleep.
                break;
            }
            if length > 0 {
                occupancy.insert(t, t + length);
                placed.push(Interval::new(
                    t,
                    t + length,
                    IntervalKind::Break,
                    self.policy.label(placed_count),
                ));
                t += length;
            }
        }

        let pending: Vec<StudyUnit> = queue.into();
        if !pending.is_empty() {
            debug!(pending = pending.len(), "placement ended with units left over");
        }
        PlacementOutcome { placed, pending }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(wake: DayMinute, sleep: DayMinute) -> DayFrame {
        DayFrame {
            wake,
            sleep_absolute: sleep,
        }
    }

    fn meals() -> Vec<Interval> {
        vec![
            Interval::new(1380, 1800, IntervalKind::Sleep, "Sleep"),
            Interval::new(450, 480, IntervalKind::Meal, "Breakfast"),
            Interval::new(780, 810, IntervalKind::Meal, "Lunch"),
            Interval::new(1200, 1230, IntervalKind::Meal, "Dinner"),
        ]
    }

    fn spans(outcome: &PlacementOutcome) -> Vec<(DayMinute, DayMinute, IntervalKind)> {
        outcome.placed.iter().map(|i| (i.start, i.end, i.kind)).collect()
    }

    #[test]
    fn test_places_around_breakfast() {
        let placer = GreedyPlacer::new(frame(360, 1380), BreakPolicy::new(15, 2), 15);
        let units = vec![StudyUnit::new("Physics", 120), StudyUnit::new("Chemistry", 90)];
        let outcome = placer.place(&meals(), units);

        assert!(!outcome.is_incomplete());
        assert_eq!(
            spans(&outcome),
            vec![
                (480, 600, IntervalKind::Study),
                (600, 615, IntervalKind::Break),
                (615, 705, IntervalKind::Study),
                (705, 735, IntervalKind::Break),
            ]
        );
        assert_eq!(outcome.placed[1].label, "Short break");
        assert_eq!(outcome.placed[3].label, "Long break");
    }

    #[test]
    fn test_unit_straddling_fixed_block_waits() {
        // 60-minute unit at 12:30 would run into lunch at 13:00
        let placer = GreedyPlacer::new(frame(750, 1380), BreakPolicy::new(10, 3), 15);
        let outcome = placer.place(&meals(), vec![StudyUnit::new("Maths", 60)]);
        assert_eq!(outcome.placed[0].start, 810);
        assert_eq!(outcome.placed[0].end, 870);
    }

    #[test]
    fn test_fifo_order_kept() {
        // The long head unit blocks the short one behind it
        let fixed = vec![Interval::new(540, 600, IntervalKind::School, "School")];
        let placer = GreedyPlacer::new(frame(480, 780), BreakPolicy::new(5, 4), 15);
        let units = vec![StudyUnit::new("Long", 90), StudyUnit::new("Short", 30)];
        let outcome = placer.place(&fixed, units);

        assert_eq!(outcome.placed[0].subject_name.as_deref(), Some("Long"));
        assert_eq!(outcome.placed[0].start, 600);
        // Short follows Long and its break, not the 08:00 gap
        assert_eq!(outcome.placed[2].subject_name.as_deref(), Some("Short"));
        assert_eq!(outcome.placed[2].start, 695);
    }

    #[test]
    fn test_incomplete_when_day_runs_out() {
        let placer = GreedyPlacer::new(frame(1260, 1380), BreakPolicy::new(15, 2), 15);
        let units = vec![StudyUnit::new("A", 60), StudyUnit::new("B", 60)];
        let outcome = placer.place(&meals(), units);

        assert!(outcome.is_incomplete());
        assert_eq!(outcome.placed_units(), 1);
        assert_eq!(outcome.pending, vec![StudyUnit::new("B", 60)]);
    }

    #[test]
    fn test_break_omitted_before_sleep() {
        let placer = GreedyPlacer::new(frame(1320, 1380), BreakPolicy::new(15, 2), 15);
        let outcome = placer.place(&meals(), vec![StudyUnit::new("A", 60)]);
        assert!(!outcome.is_incomplete());
        assert_eq!(spans(&outcome), vec![(1320, 1380, IntervalKind::Study)]);
    }

    #[test]
    fn test_break_may_overlap_meal() {
        // Unit ends at 07:30, right where breakfast starts
        let placer = GreedyPlacer::new(frame(390, 1380), BreakPolicy::new(15, 3), 15);
        let outcome = placer.place(&meals(), vec![StudyUnit::new("A", 60), StudyUnit::new("B", 30)]);
        assert_eq!(outcome.placed[1].kind, IntervalKind::Break);
        assert_eq!((outcome.placed[1].start, outcome.placed[1].end), (450, 465));
        // B waits for breakfast to end
        assert_eq!(outcome.placed[2].start, 480);
    }

    #[test]
    fn test_no_unit_after_missing_break() {
        // A 15-minute unit would fit after A, but A's break cannot
        let placer = GreedyPlacer::new(frame(1290, 1380), BreakPolicy::new(30, 3), 15);
        let units = vec![StudyUnit::new("A", 75), StudyUnit::new("B", 10)];
        let outcome = placer.place(&meals(), units);
        assert_eq!(outcome.placed_units(), 1);
        assert_eq!(outcome.pending, vec![StudyUnit::new("B", 10)]);
    }

    #[test]
    fn test_overnight_placement_past_midnight() {
        let fixed = vec![Interval::new(1560, 1800, IntervalKind::Sleep, "Sleep")];
        let placer = GreedyPlacer::new(frame(1380, 1560), BreakPolicy::new(10, 2), 15);
        let outcome = placer.place(&fixed, vec![StudyUnit::new("Night", 120)]);
        assert_eq!(spans(&outcome)[0], (1380, 1500, IntervalKind::Study));
        assert!(outcome.placed[0].end > 1440);
    }

    #[test]
    fn test_empty_units() {
        let placer = GreedyPlacer::new(frame(360, 1380), BreakPolicy::new(15, 2), 15);
        let outcome = placer.place(&meals(), Vec::new());
        assert!(outcome.placed.is_empty());
        assert!(!outcome.is_incomplete());
    }
}
