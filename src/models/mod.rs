//! Study-planning domain models.
//!
//! Provides the data types for describing a student's day and the plan
//! built from it.
//!
//! # Domain Mappings
//!
//! | study-schedule | Generic scheduling |
//! |----------------|--------------------|
//! | Routine | Problem instance |
//! | Fixed block (sleep, school, coaching, meal) | Blocked period |
//! | StudyUnit | Job with fixed processing time |
//! | Interval | Assignment on a single resource (the student) |
//! | ScheduleResult | Schedule |

mod interval;
mod occupancy;
mod routine;
mod schedule;
mod subject;
mod time;

pub use interval::{Interval, IntervalKind};
pub use occupancy::Occupancy;
pub use routine::{ClassType, HourRange, Routine, StudentType};
pub use schedule::{ScheduleEntry, ScheduleResult};
pub use subject::{Difficulty, StudyUnit, SubjectInput};
pub use time::{format_clock, normalize_overnight, parse_clock, DayFrame, DayMinute, MINUTES_PER_DAY};
