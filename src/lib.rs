//! Daily study timetable planner.
//!
//! Places difficulty-weighted study blocks onto a 24-hour day that is
//! already partly taken by fixed obligations (sleep, school, coaching,
//! meals), inserting short and long breaks and handling sleep that crosses
//! midnight.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Routine`, `SubjectInput`, `StudyUnit`,
//!   `Interval`, `ScheduleResult`, and the `HH:MM` time codec
//! - **`scheduler`**: Fixed blocks, budget check, weighted allocation,
//!   greedy placement, assembly, and the end-to-end `StudyPlanner`
//! - **`validation`**: Routine checks (subject list, names, ranges)
//! - **`config`**: Planner tunables (granularity, meals, input limits)
//! - **`error`**: `PlanError` and `Result`
//!
//! # Example
//!
//! ```
//! use study_schedule::models::{Routine, SubjectInput};
//! use study_schedule::scheduler::StudyPlanner;
//!
//! let routine = Routine::new("06:30", "22:30")
//!     .with_subject(SubjectInput::hard("Maths"))
//!     .with_subject(SubjectInput::easy("English"))
//!     .with_total_study_minutes(180);
//!
//! let plan = StudyPlanner::new().plan(&routine).unwrap();
//! for entry in &plan.entries {
//!     println!("{:<20} {}", entry.span_label(), entry.activity_label);
//! }
//! ```
//!
//! # Design
//!
//! The planner is a pure, synchronous computation. It reads only its inputs,
//! keeps no shared state, and returns identical output for identical input.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//!   (list scheduling)

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{PlanError, Result};
