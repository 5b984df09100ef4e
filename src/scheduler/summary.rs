//! Schedule quality summary.
//!
//! Computes headline figures for a finished day plan.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Study minutes | Sum of placed study entries |
//! | Break minutes | Sum of break entries |
//! | Fixed minutes | Sum of sleep, school, coaching and meal entries |
//! | Study share | Study minutes / awake minutes |
//! | Longest block | Longest single study entry |
//! | Placement rate | Placed study minutes / allocated minutes |

use std::collections::HashMap;

use crate::models::{DayMinute, IntervalKind, ScheduleResult, MINUTES_PER_DAY};

/// Summary figures of a schedule. All durations are in minutes.
#[derive(Debug, Clone)]
pub struct ScheduleSummary {
    /// Placed study minutes.
    pub study_minutes: DayMinute,
    /// Break minutes.
    pub break_minutes: DayMinute,
    /// Fixed-obligation minutes (including sleep).
    pub fixed_minutes: DayMinute,
    /// Awake minutes (the day minus sleep).
    pub awake_minutes: DayMinute,
    /// Study minutes per subject.
    pub study_by_subject: HashMap<String, DayMinute>,
    /// Number of placed study units.
    pub placed_units: usize,
    /// Longest single study entry.
    pub longest_block: DayMinute,
    /// Fraction of awake time spent studying (0.0..1.0).
    pub study_share: f64,
    /// Fraction of allocated minutes that were placed (0.0..1.0).
    pub placement_rate: f64,
}

impl ScheduleSummary {
    /// Computes the summary of a schedule.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let mut fixed_minutes = 0;
        let mut sleep_minutes = 0;
        let mut longest_block = 0;
        let mut placed_units = 0;

        for e in &result.entries {
            if e.kind.is_fixed() {
                fixed_minutes += e.duration();
            }
            match e.kind {
                IntervalKind::Sleep => sleep_minutes += e.duration(),
                IntervalKind::Study => {
                    placed_units += 1;
                    longest_block = longest_block.max(e.duration());
                }
                _ => {}
            }
        }

        let study_minutes = result.study_minutes();
        let awake_minutes = MINUTES_PER_DAY.saturating_sub(sleep_minutes);

        let study_share = if awake_minutes == 0 {
            0.0
        } else {
            f64::from(study_minutes) / f64::from(awake_minutes)
        };
        let placement_rate = if result.allocated_minutes == 0 {
            1.0
        } else {
            f64::from(study_minutes) / f64::from(result.allocated_minutes)
        };

        Self {
            study_minutes,
            break_minutes: result.minutes_of_kind(IntervalKind::Break),
            fixed_minutes,
            awake_minutes,
            study_by_subject: result.study_minutes_by_subject(),
            placed_units,
            longest_block,
            study_share,
            placement_rate,
        }
    }

    /// Whether the plan meets a minimum study share and placement rate.
    pub fn meets_thresholds(&self, min_study_share: f64, min_placement_rate: f64) -> bool {
        self.study_share >= min_study_share && self.placement_rate >= min_placement_rate
    }
}
