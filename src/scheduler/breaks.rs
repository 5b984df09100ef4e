//! Break length policy.

use serde::{Deserialize, Serialize};

use crate::models::DayMinute;

/// Break length after the `placed_count`-th study unit (1-indexed).
///
/// Every `long_every`-th unit earns a long break of twice the short length.
/// A zero period never yields a long break.
///
/// # Examples
///
/// ```
/// use study_schedule::scheduler::next_break;
///
/// assert_eq!(next_break(1, 15, 2), 15);
/// assert_eq!(next_break(2, 15, 2), 30);
/// ```
#[inline]
pub fn next_break(placed_count: u32, short_minutes: DayMinute, long_every: u32) -> DayMinute {
    if long_every != 0 && placed_count % long_every == 0 {
        2 * short_minutes
    } else {
        short_minutes
    }
}

/// Short/long break settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPolicy {
    /// Short break length.
    pub short_minutes: DayMinute,
    /// Long break after every n-th unit.
    pub long_every: u32,
}

impl BreakPolicy {
    /// Creates a new policy.
    pub fn new(short_minutes: DayMinute, long_every: u32) -> Self {
        Self {
            short_minutes,
            long_every,
        }
    }

    /// Break length after the `placed_count`-th unit.
    #[inline]
    pub fn after(&self, placed_count: u32) -> DayMinute {
        next_break(placed_count, self.short_minutes, self.long_every)
    }

    /// Whether the break after the `placed_count`-th unit is a long one.
    #[inline]
    pub fn is_long(&self, placed_count: u32) -> bool {
        self.long_every != 0 && placed_count % self.long_every == 0
    }

    /// Display label for the break after the `placed_count`-th unit.
    pub fn label(&self, placed_count: u32) -> &'static str {
        if self.is_long(placed_count) {
            "Long break"
        } else {
            "Short break"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_law() {
        let lengths: Vec<DayMinute> = (1..=6).map(|n| next_break(n, 10, 3)).collect();
        assert_eq!(lengths, vec![10, 10, 20, 10, 10, 20]);
    }

    #[test]
    fn test_every_unit_long() {
        assert!((1..=4).all(|n| next_break(n, 5, 1) == 10));
    }

    #[test]
    fn test_zero_period_never_long() {
        assert_eq!(next_break(3, 15, 0), 15);
    }

    #[test]
    fn test_policy_labels() {
        let p = BreakPolicy::new(15, 2);
        assert_eq!(p.after(1), 15);
        assert_eq!(p.after(2), 30);
        assert_eq!(p.label(1), "Short break");
        assert_eq!(p.label(2), "Long break");
    }
}
