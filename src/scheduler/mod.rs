//! Greedy timetable generation.
//!
//! # Algorithm
//!
//! `TimetableGenerator` is a greedy, least-loaded-faculty, first-feasible
//! solver: it is fast and conflict-free but not optimal, and it may fail
//! to place a subject on instances a backtracking search could solve.
//!
//! # Shared State
//!
//! `AvailabilityTracker` carries the run's only mutable state — slot
//! occupancy and faculty load counters — and is shared across all
//! semesters of a run so cross-semester double-booking is impossible.

mod availability;
mod engine;

pub use availability::AvailabilityTracker;
pub use engine::{GenerationReport, SchedulerConfig, TimetableGenerator, Unscheduled};
