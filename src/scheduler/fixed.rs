//! Fixed obligations on the day line.
//!
//! # Algorithm
//!
//! 1. Parse and normalize wake/sleep into a [`DayFrame`].
//! 2. Emit sleep over `[sleep_absolute, wake + 1440)`.
//! 3. Emit school (regular students) and coaching (tiers above lower). Each
//!    must lie inside the awake window, and they must not overlap.
//! 4. Emit each configured meal at its nominal time, or at wake if that is
//!    later. A meal colliding with school, coaching or an earlier meal slides
//!    to the end of that block. A meal is omitted when it cannot fit inside
//!    the awake window, or when it would take the last free minutes of it.

use tracing::debug;

use crate::config::MealWindow;
use crate::error::{PlanError, Result};
use crate::models::{DayFrame, DayMinute, HourRange, Interval, IntervalKind, Routine, MINUTES_PER_DAY};

/// Fixed blocks for one day together with the awake window they frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBlocks {
    /// Normalized wake/sleep window.
    pub frame: DayFrame,
    /// Sleep, school, coaching and meal intervals in emission order.
    pub blocks: Vec<Interval>,
}

impl FixedBlocks {
    /// Total minutes covered by fixed blocks.
    pub fn total_minutes(&self) -> DayMinute {
        self.blocks.iter().map(Interval::duration).sum()
    }
}

/// Builds the fixed intervals of a routine.
///
/// # Errors
/// - [`PlanError::InvalidTimeFormat`] for a malformed wake or sleep time.
/// - [`PlanError::OverlappingFixedBlocks`] if school and coaching overlap,
///   or either runs into sleep.
pub fn build_fixed_blocks(routine: &Routine, meals: &[MealWindow]) -> Result<FixedBlocks> {
    let frame = DayFrame::parse(&routine.wake_time, &routine.sleep_time)?;

    let mut blocks = vec![Interval::new(
        frame.sleep_absolute,
        frame.wake + MINUTES_PER_DAY,
        IntervalKind::Sleep,
        "Sleep",
    )];

    let mut obligations: Vec<Interval> = Vec::new();
    if routine.attends_school() {
        obligations.push(hour_block(routine.school_hours, IntervalKind::School, "School"));
    }
    if routine.attends_coaching() {
        obligations.push(hour_block(routine.coaching_hours, IntervalKind::Coaching, "Coaching"));
    }

    for block in &obligations {
        if !frame.contains_span(block.start, block.end) {
            return Err(PlanError::overlap(block.label.as_str(), "Sleep"));
        }
    }
    if let [a, b] = obligations.as_slice() {
        if a.overlaps(b) {
            return Err(PlanError::overlap(a.label.as_str(), b.label.as_str()));
        }
    }

    let mut taken = obligations.clone();
    for meal in meals {
        match place_meal(meal, &frame, &taken) {
            Some(interval) => {
                taken.push(interval.clone());
                blocks.push(interval);
            }
            None => debug!(
                meal = %meal.label,
                start = meal.start,
                wake = frame.wake,
                sleep = frame.sleep_absolute,
                "meal does not fit the awake window, omitted"
            ),
        }
    }

    blocks.extend(obligations);
    Ok(FixedBlocks { frame, blocks })
}

fn hour_block(hours: HourRange, kind: IntervalKind, label: &str) -> Interval {
    let (start, end) = hours.to_minutes();
    Interval::new(start, end, kind, label)
}

/// Finds a slot for a meal at or after its nominal time, clear of `taken`.
///
/// `taken` holds disjoint blocks inside the awake window.
fn place_meal(meal: &MealWindow, frame: &DayFrame, taken: &[Interval]) -> Option<Interval> {
    let free = frame
        .awake_minutes()
        .saturating_sub(taken.iter().map(Interval::duration).sum());
    if meal.duration >= free {
        return None;
    }

    let mut start = meal.start.max(frame.wake);
    // Each slide moves strictly past one taken block.
    for _ in 0..=taken.len() {
        let end = start.checked_add(meal.duration)?;
        match taken.iter().find(|o| o.overlaps_span(start, end)) {
            Some(blocker) => start = blocker.end,
            None => {
                return frame
                    .contains_span(start, end)
                    .then(|| Interval::new(start, end, IntervalKind::Meal, meal.label.as_str()));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::models::{ClassType, StudentType};

    fn meals() -> Vec<MealWindow> {
        PlannerConfig::default().meals
    }

    fn find(fixed: &FixedBlocks, label: &str) -> Option<(DayMinute, DayMinute)> {
        fixed
            .blocks
            .iter()
            .find(|b| b.label == label)
            .map(|b| (b.start, b.end))
    }

    #[test]
    fn test_sleep_and_meals_only() {
        let routine = Routine::new("06:00", "23:00");
        let fixed = build_fixed_blocks(&routine, &meals()).unwrap();

        assert_eq!(fixed.blocks[0].kind, IntervalKind::Sleep);
        assert_eq!(find(&fixed, "Sleep"), Some((1380, 1800)));
        assert_eq!(find(&fixed, "Breakfast"), Some((450, 480)));
        assert_eq!(find(&fixed, "Lunch"), Some((780, 810)));
        assert_eq!(find(&fixed, "Dinner"), Some((1200, 1230)));
        assert_eq!(fixed.blocks.len(), 4);
        assert_eq!(fixed.total_minutes(), 420 + 90);
    }

    #[test]
    fn test_overnight_sleep() {
        let routine = Routine::new("06:00", "02:00");
        let fixed = build_fixed_blocks(&routine, &meals()).unwrap();
        assert_eq!(fixed.frame.sleep_absolute, 1560);
        assert_eq!(find(&fixed, "Sleep"), Some((1560, 1800)));
    }

    #[test]
    fn test_school_and_coaching() {
        let routine = Routine::new("06:00", "23:00")
            .with_student_type(StudentType::Regular)
            .with_school_hours(HourRange::new(8, 14))
            .with_class_type(ClassType::Upper)
            .with_coaching_hours(HourRange::new(16, 19));
        let fixed = build_fixed_blocks(&routine, &meals()).unwrap();

        assert_eq!(find(&fixed, "School"), Some((480, 840)));
        assert_eq!(find(&fixed, "Coaching"), Some((960, 1140)));
        // Lunch slides past school
        assert_eq!(find(&fixed, "Lunch"), Some((840, 870)));
    }

    #[test]
    fn test_lower_tier_has_no_coaching() {
        let routine = Routine::new("06:00", "23:00")
            .with_student_type(StudentType::Regular)
            .with_class_type(ClassType::Lower);
        let fixed = build_fixed_blocks(&routine, &meals()).unwrap();
        assert!(find(&fixed, "School").is_some());
        assert!(find(&fixed, "Coaching").is_none());
    }

    #[test]
    fn test_school_coaching_overlap() {
        let routine = Routine::new("06:00", "23:00")
            .with_student_type(StudentType::Regular)
            .with_school_hours(HourRange::new(8, 15))
            .with_class_type(ClassType::Dropper)
            .with_coaching_hours(HourRange::new(14, 17));
        let err = build_fixed_blocks(&routine, &meals()).unwrap_err();
        match err {
            PlanError::OverlappingFixedBlocks { first, second } => {
                assert_eq!(first, "School");
                assert_eq!(second, "Coaching");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_school_before_wake_overlaps_sleep() {
        let routine = Routine::new("09:00", "23:00")
            .with_student_type(StudentType::Regular)
            .with_school_hours(HourRange::new(8, 14));
        let err = build_fixed_blocks(&routine, &meals()).unwrap_err();
        assert!(matches!(
            err,
            PlanError::OverlappingFixedBlocks { ref second, .. } if second == "Sleep"
        ));
    }

    #[test]
    fn test_meal_outside_awake_window_omitted() {
        // Awake 08:00-08:30: breakfast at wake would fill the whole window
        let routine = Routine::new("08:00", "08:30");
        let fixed = build_fixed_blocks(&routine, &meals()).unwrap();
        assert_eq!(fixed.blocks.len(), 1);
        assert_eq!(fixed.total_minutes(), 1410);
    }

    #[test]
    fn test_breakfast_before_wake_moves_to_wake() {
        let routine = Routine::new("08:00", "23:00");
        let fixed = build_fixed_blocks(&routine, &meals()).unwrap();
        assert_eq!(find(&fixed, "Breakfast"), Some((480, 510)));
        assert_eq!(find(&fixed, "Lunch"), Some((780, 810)));
        assert_eq!(find(&fixed, "Dinner"), Some((1200, 1230)));
        let meal_count = fixed
            .blocks
            .iter()
            .filter(|b| b.kind == IntervalKind::Meal)
            .count();
        assert_eq!(meal_count, 3);
    }

    #[test]
    fn test_late_riser_meals_stack_after_wake() {
        // Awake 15:00-03:00: breakfast and lunch are both due before wake
        let routine = Routine::new("15:00", "03:00");
        let fixed = build_fixed_blocks(&routine, &meals()).unwrap();
        assert_eq!(find(&fixed, "Breakfast"), Some((900, 930)));
        assert_eq!(find(&fixed, "Lunch"), Some((930, 960)));
        assert_eq!(find(&fixed, "Dinner"), Some((1200, 1230)));
    }

    #[test]
    fn test_meal_never_takes_last_free_minutes() {
        // Awake 08:00-09:00: breakfast fits, lunch would leave nothing
        let routine = Routine::new("08:00", "09:00");
        let fixed = build_fixed_blocks(&routine, &meals()).unwrap();
        assert_eq!(find(&fixed, "Breakfast"), Some((480, 510)));
        assert!(find(&fixed, "Lunch").is_none());
        assert!(find(&fixed, "Dinner").is_none());
    }

    #[test]
    fn test_invalid_wake_time() {
        let routine = Routine::new("6am", "23:00");
        let err = build_fixed_blocks(&routine, &meals()).unwrap_err();
        assert!(matches!(err, PlanError::InvalidTimeFormat { .. }));
    }
}
