//! Study-time budget.
//!
//! The free time of a day is whatever fixed blocks leave over. Requests that
//! exceed it are rejected before any allocation or placement runs.

use crate::error::{PlanError, Result};
use crate::models::{DayMinute, Interval};

/// Minutes left in a day of `day_minutes` after the fixed blocks.
///
/// Saturates at zero.
pub fn available_minutes(day_minutes: DayMinute, fixed_blocks: &[Interval]) -> DayMinute {
    let fixed: DayMinute = fixed_blocks.iter().map(Interval::duration).sum();
    day_minutes.saturating_sub(fixed)
}

/// Checks a study request against the available minutes.
///
/// # Errors
/// [`PlanError::Infeasible`] with the shortfall when `requested > available`.
///
/// # Examples
///
/// ```
/// use study_schedule::scheduler::validate_budget;
///
/// assert!(validate_budget(120, 120).is_ok());
/// assert!(validate_budget(30, 60).is_err());
/// ```
pub fn validate_budget(available: DayMinute, requested: DayMinute) -> Result<()> {
    if requested > available {
        return Err(PlanError::Infeasible {
            shortfall_minutes: requested - available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IntervalKind, MINUTES_PER_DAY};

    #[test]
    fn test_available_minutes() {
        let blocks = vec![
            Interval::new(1380, 1800, IntervalKind::Sleep, "Sleep"),
            Interval::new(450, 480, IntervalKind::Meal, "Breakfast"),
            Interval::new(780, 810, IntervalKind::Meal, "Lunch"),
        ];
        assert_eq!(available_minutes(MINUTES_PER_DAY, &blocks), 1440 - 420 - 60);
        assert_eq!(available_minutes(MINUTES_PER_DAY, &[]), 1440);
    }

    #[test]
    fn test_available_saturates() {
        let blocks = vec![Interval::new(0, 2000, IntervalKind::Sleep, "Sleep")];
        assert_eq!(available_minutes(MINUTES_PER_DAY, &blocks), 0);
    }

    #[test]
    fn test_shortfall() {
        let err = validate_budget(30, 60).unwrap_err();
        assert!(matches!(err, PlanError::Infeasible { shortfall_minutes: 30 }));
        assert!(validate_budget(0, 0).is_ok());
    }
}
