//! End-to-end study planner.
//!
//! # Algorithm
//!
//! 1. Validate the routine against the configured limits.
//! 2. Build fixed blocks (sleep, school, coaching, meals).
//! 3. Check the study request against the free minutes; fail fast.
//! 4. Split the request across subjects by difficulty.
//! 5. Place units greedily with breaks.
//! 6. Assemble the ordered, wrapped result.
//!
//! Steps 1-3 can fail. Step 5 never fails: units that do not fit are
//! reported on the result.

use tracing::{debug, info, warn};

use super::{allocate, assemble, available_minutes, build_fixed_blocks, validate_budget};
use super::{BreakPolicy, GreedyPlacer};
use crate::config::PlannerConfig;
use crate::error::{PlanError, Result};
use crate::models::{Routine, ScheduleResult, MINUTES_PER_DAY};
use crate::validation::validate_routine;

/// Builds daily study schedules.
///
/// Holds only configuration, so one planner can serve any number of
/// routines, from any number of threads.
///
/// # Example
///
/// ```
/// use study_schedule::models::{IntervalKind, Routine, SubjectInput};
/// use study_schedule::scheduler::StudyPlanner;
///
/// let routine = Routine::new("06:00", "23:00")
///     .with_subject(SubjectInput::hard("Physics"))
///     .with_subject(SubjectInput::medium("Chemistry"))
///     .with_total_study_minutes(210)
///     .with_breaks(15, 2);
///
/// let schedule = StudyPlanner::new().plan(&routine).unwrap();
/// assert!(schedule.is_complete());
/// assert_eq!(schedule.study_minutes(), 210);
/// assert_eq!(schedule.entries_of_kind(IntervalKind::Meal).len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StudyPlanner {
    config: PlannerConfig,
}

impl StudyPlanner {
    /// Creates a planner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner with a custom configuration.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans one day for `routine`.
    ///
    /// # Errors
    /// - [`PlanError::InvalidInput`] if the routine fails validation.
    /// - [`PlanError::InvalidTimeFormat`] for a malformed wake/sleep time.
    /// - [`PlanError::OverlappingFixedBlocks`] for clashing obligations.
    /// - [`PlanError::Infeasible`] if the request exceeds the free time.
    pub fn plan(&self, routine: &Routine) -> Result<ScheduleResult> {
        validate_routine(routine, &self.config.limits).map_err(PlanError::InvalidInput)?;

        let fixed = build_fixed_blocks(routine, &self.config.meals)?;
        debug!(
            wake = fixed.frame.wake,
            sleep = fixed.frame.sleep_absolute,
            overnight = fixed.frame.sleeps_after_midnight(),
            blocks = fixed.blocks.len(),
            "built fixed blocks"
        );

        let available = available_minutes(MINUTES_PER_DAY, &fixed.blocks);
        if let Err(err) = validate_budget(available, routine.total_study_minutes) {
            warn!(
                available,
                requested = routine.total_study_minutes,
                "study request exceeds free time"
            );
            return Err(err);
        }

        let allocation = allocate(&routine.subjects, routine.total_study_minutes);
        let allocated = allocation.total_minutes();
        debug!(
            units = allocation.units.len(),
            allocated,
            remainder = allocation.remainder,
            "allocated study time"
        );

        let placer = GreedyPlacer::new(
            fixed.frame,
            BreakPolicy::new(routine.break_minutes, routine.long_break_every),
            self.config.granularity_minutes,
        );
        let outcome = placer.place(&fixed.blocks, allocation.units);

        if outcome.is_incomplete() {
            warn!(
                unplaced = outcome.pending.len(),
                "schedule incomplete: some study units did not fit"
            );
        }

        let result = assemble(&fixed.blocks, outcome.placed, outcome.pending, allocated);
        info!(
            entries = result.entry_count(),
            study_minutes = result.study_minutes(),
            incomplete = result.incomplete,
            "study schedule generated"
        );
        Ok(result)
    }
}
