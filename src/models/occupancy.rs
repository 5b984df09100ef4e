//! Occupancy index over the day-minute line.
//!
//! Keeps the union of all occupied intervals as sorted, disjoint spans so
//! that point and range queries are binary searches instead of scans over
//! every interval.

use super::{DayMinute, Interval};

/// Sorted, merged set of occupied spans.
///
/// Spans are disjoint and non-adjacent; inserting an interval that touches
/// or overlaps existing spans merges them.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    spans: Vec<(DayMinute, DayMinute)>,
}

impl Occupancy {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from existing intervals.
    pub fn from_intervals<'a>(intervals: impl IntoIterator<Item = &'a Interval>) -> Self {
        let mut occupancy = Self::new();
        for interval in intervals {
            occupancy.insert(interval.start, interval.end);
        }
        occupancy
    }

    /// Marks `[start, end)` as occupied. Empty spans are ignored.
    pub fn insert(&mut self, start: DayMinute, end: DayMinute) {
        if start >= end {
            return;
        }

        // First span that ends at or after `start` (may touch or overlap).
        let first = self.spans.partition_point(|&(_, e)| e < start);
        // First span that starts strictly after `end` (cannot merge).
        let last = self.spans.partition_point(|&(s, _)| s <= end);

        let mut merged = (start, end);
        if first < last {
            merged.0 = merged.0.min(self.spans[first].0);
            merged.1 = merged.1.max(self.spans[last - 1].1);
        }
        self.spans.splice(first..last, std::iter::once(merged));
    }

    /// Whether `minute` lies inside an occupied span.
    #[inline]
    pub fn is_occupied(&self, minute: DayMinute) -> bool {
        !self.is_free(minute, minute + 1)
    }

    /// Whether the whole span `[start, end)` is free.
    pub fn is_free(&self, start: DayMinute, end: DayMinute) -> bool {
        let idx = self.spans.partition_point(|&(_, e)| e <= start);
        match self.spans.get(idx) {
            Some(&(s, _)) => s >= end,
            None => true,
        }
    }

    /// Total occupied minutes.
    pub fn occupied_minutes(&self) -> DayMinute {
        self.spans.iter().map(|&(s, e)| e - s).sum()
    }

    /// Number of disjoint spans.
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IntervalKind;

    #[test]
    fn test_empty_is_free() {
        let occ = Occupancy::new();
        assert!(occ.is_free(0, 1440));
        assert!(!occ.is_occupied(0));
        assert_eq!(occ.occupied_minutes(), 0);
    }

    #[test]
    fn test_point_and_range_queries() {
        let mut occ = Occupancy::new();
        occ.insert(450, 480);
        occ.insert(780, 810);

        assert!(occ.is_occupied(450));
        assert!(occ.is_occupied(479));
        assert!(!occ.is_occupied(480)); // exclusive end

        assert!(occ.is_free(360, 450)); // touches breakfast
        assert!(!occ.is_free(360, 451));
        assert!(occ.is_free(480, 780));
        assert!(!occ.is_free(700, 900)); // straddles lunch
        assert!(occ.is_free(810, 1440));
    }

    #[test]
    fn test_merging() {
        let mut occ = Occupancy::new();
        occ.insert(100, 200);
        occ.insert(300, 400);
        assert_eq!(occ.span_count(), 2);

        occ.insert(200, 300); // bridges both
        assert_eq!(occ.span_count(), 1);
        assert_eq!(occ.occupied_minutes(), 300);

        occ.insert(150, 250); // fully inside
        assert_eq!(occ.span_count(), 1);
        assert_eq!(occ.occupied_minutes(), 300);

        occ.insert(50, 60);
        occ.insert(500, 600);
        assert_eq!(occ.span_count(), 3);
        assert!(!occ.is_free(55, 56));
        assert!(occ.is_free(60, 100));
    }

    #[test]
    fn test_overlapping_inserts_count_once() {
        let mut occ = Occupancy::new();
        occ.insert(480, 510); // meal
        occ.insert(480, 495); // break laid over it
        assert_eq!(occ.occupied_minutes(), 30);
    }

    #[test]
    fn test_from_intervals() {
        let intervals = vec![
            Interval::new(1380, 1800, IntervalKind::Sleep, "Sleep"),
            Interval::new(450, 480, IntervalKind::Meal, "Breakfast"),
        ];
        let occ = Occupancy::from_intervals(&intervals);
        assert_eq!(occ.span_count(), 2);
        assert!(occ.is_occupied(1500));
        assert!(!occ.is_free(1300, 1400));
    }
}
