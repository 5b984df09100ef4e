//! Study-day scheduling pipeline.
//!
//! Turns a [`Routine`](crate::models::Routine) into a
//! [`ScheduleResult`](crate::models::ScheduleResult) in one deterministic
//! greedy pass.
//!
//! # Pipeline
//!
//! | Stage | Module | Fails with |
//! |-------|--------|------------|
//! | Fixed blocks | `fixed` | `InvalidTimeFormat`, `OverlappingFixedBlocks` |
//! | Budget | `budget` | `Infeasible` |
//! | Allocation | `allocator` | - |
//! | Placement | `placer`, `breaks` | never (sets `incomplete`) |
//! | Assembly | `assembler` | - |
//!
//! [`StudyPlanner`] runs all stages; each stage is also usable alone.
//! [`ScheduleSummary`] reports on a finished plan.

mod allocator;
mod assembler;
mod breaks;
mod budget;
mod fixed;
mod placer;
mod planner;
mod summary;

pub use allocator::{allocate, Allocation};
pub use assembler::assemble;
pub use breaks::{next_break, BreakPolicy};
pub use budget::{available_minutes, validate_budget};
pub use fixed::{build_fixed_blocks, FixedBlocks};
pub use placer::{GreedyPlacer, PlacementOutcome};
pub use planner::StudyPlanner;
pub use summary::ScheduleSummary;
