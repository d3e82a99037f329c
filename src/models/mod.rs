//! Timetabling domain models.
//!
//! Core data types for representing a scheduling catalog and its
//! solution: the entities the engine consumes (faculty, rooms, subjects,
//! time slots) and the entities it produces (schedule entries grouped
//! into per-semester timetables).

mod faculty;
mod room;
mod subject;
mod timeslot;
mod timetable;

pub use faculty::Faculty;
pub use room::{Room, RoomKind};
pub use subject::Subject;
pub use timeslot::{TimeSlot, Weekday};
pub use timetable::{ScheduleEntry, SessionKind, Timetable};
