//! Weekly university timetable generation.
//!
//! Assigns lecture and lab sessions to faculty, rooms, and fixed time
//! slots for multiple academic semesters, subject to no-double-booking
//! and per-day workload constraints. The engine is a bounded greedy
//! solver: fast, conflict-free, deliberately not optimal.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Faculty`, `Room`, `Subject`,
//!   `TimeSlot`, `ScheduleEntry`, `Timetable`
//! - **`catalog`**: The read-only input snapshot for one generation run,
//!   with day-indexed slot grouping and emptiness checks
//! - **`scheduler`**: The greedy assignment engine and the availability
//!   tracker it shares across semesters
//! - **`store`**: Storage collaborator trait for persisting timetables
//!   (upsert keyed by semester) plus an in-memory implementation
//! - **`validation`**: Catalog integrity pre-flight (duplicate IDs,
//!   duplicate day/slot pairs)
//! - **`error`**: Error taxonomy — only an incomplete catalog or a
//!   storage failure aborts a run; unplaceable subjects are reported,
//!   not raised
//!
//! # Example
//!
//! ```
//! use u_timetable::catalog::Catalog;
//! use u_timetable::models::{Faculty, Room, Subject, TimeSlot, Weekday};
//! use u_timetable::scheduler::{SchedulerConfig, TimetableGenerator};
//! use u_timetable::store::{InMemoryStore, TimetableStore};
//!
//! let mut catalog = Catalog::new()
//!     .with_faculty(Faculty::new("F1").with_name("Dr. Rao"))
//!     .with_room(Room::lecture("R101").with_capacity(60))
//!     .with_subject(Subject::new("CS201", 1).without_lab());
//! for (d, day) in [Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday]
//!     .into_iter()
//!     .enumerate()
//! {
//!     for n in 1..=2 {
//!         catalog = catalog.with_time_slot(TimeSlot::new(format!("T{d}-{n}"), day, n));
//!     }
//! }
//!
//! let store = InMemoryStore::new();
//! let generator = TimetableGenerator::with_config(SchedulerConfig::default().with_seed(1));
//! let report = generator.run(&catalog, &store).unwrap();
//!
//! assert!(report.is_complete());
//! assert_eq!(store.get(1).unwrap().unwrap().entry_count(), 3);
//! ```

pub mod catalog;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;
