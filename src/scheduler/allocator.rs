//! Difficulty-weighted time allocation.
//!
//! # Algorithm
//! Each subject receives `floor(total × w_i / Σw)` minutes with weights
//! easy=1, medium=1.5 and hard=2. Weights are handled in half-units (2/3/4)
//! so the split is exact integer arithmetic. Subjects that floor to zero
//! minutes are dropped. The rounding remainder is not redistributed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DayMinute, StudyUnit, SubjectInput};

/// Output of the allocator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// One unit per subject with a non-zero share, in subject order.
    pub units: Vec<StudyUnit>,
    /// Minutes lost to floor rounding.
    pub remainder: DayMinute,
}

impl Allocation {
    /// Sum of allocated minutes.
    pub fn total_minutes(&self) -> DayMinute {
        self.units.iter().map(|u| u.allocated_minutes).sum()
    }
}

/// Splits `total_minutes` across `subjects` by difficulty weight.
///
/// # Examples
///
/// ```
/// use study_schedule::models::SubjectInput;
/// use study_schedule::scheduler::allocate;
///
/// let subjects = [SubjectInput::hard("Physics"), SubjectInput::medium("Chemistry")];
/// let allocation = allocate(&subjects, 210);
/// assert_eq!(allocation.units[0].allocated_minutes, 120);
/// assert_eq!(allocation.units[1].allocated_minutes, 90);
/// ```
pub fn allocate(subjects: &[SubjectInput], total_minutes: DayMinute) -> Allocation {
    let weight_sum: u64 = subjects
        .iter()
        .map(|s| u64::from(s.difficulty.half_weight()))
        .sum();
    if weight_sum == 0 {
        return Allocation {
            units: Vec::new(),
            remainder: total_minutes,
        };
    }

    let mut units = Vec::with_capacity(subjects.len());
    for subject in subjects {
        let share = u64::from(total_minutes) * u64::from(subject.difficulty.half_weight()) / weight_sum;
        // share <= total_minutes, so it fits
        let minutes = share as DayMinute;
        if minutes == 0 {
            debug!(subject = %subject.name, "allocation floored to zero, dropped");
            continue;
        }
        units.push(StudyUnit::new(subject.name.as_str(), minutes));
    }

    let allocated: DayMinute = units.iter().map(|u| u.allocated_minutes).sum();
    Allocation {
        remainder: total_minutes - allocated,
        units,
    }
}
