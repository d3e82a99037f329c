//! Timetable (solution) model.
//!
//! A timetable is the complete weekly schedule for one semester: an
//! ordered set of schedule entries plus a generation timestamp. Entries
//! are denormalized to IDs for query convenience; display joins belong
//! to outer layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Weekday;

/// Kind of a scheduled session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    /// Single-slot lecture.
    Lecture,
    /// Lab spanning two adjacent slots.
    Lab,
}

/// One scheduled session of a subject.
///
/// For labs, `slot_number` is the first slot of the 2-slot block and
/// `start_time`/`end_time` span both slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day of week.
    pub day: Weekday,
    /// Slot number (range start for labs).
    pub slot_number: u32,
    /// Scheduled subject ID.
    pub subject_id: String,
    /// Session kind.
    pub kind: SessionKind,
    /// Assigned faculty ID.
    pub faculty_id: String,
    /// Assigned room or lab ID.
    pub room_id: String,
    /// Start time of day, copied from the underlying slot.
    pub start_time: String,
    /// End time of day, copied from the underlying slot
    /// (second slot for labs).
    pub end_time: String,
}

impl ScheduleEntry {
    /// Whether this entry is a lab session.
    #[inline]
    pub fn is_lab(&self) -> bool {
        self.kind == SessionKind::Lab
    }

    /// Slot numbers this entry occupies (one for lectures, two for labs).
    pub fn occupied_slots(&self) -> Vec<u32> {
        match self.kind {
            SessionKind::Lecture => vec![self.slot_number],
            SessionKind::Lab => vec![self.slot_number, self.slot_number + 1],
        }
    }
}

/// Weekly schedule for one semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    /// Semester number this timetable belongs to.
    pub semester: u32,
    /// Schedule entries, ordered by `(day, slot_number)`.
    pub entries: Vec<ScheduleEntry>,
    /// When this timetable was generated.
    pub generated_at: DateTime<Utc>,
}

impl Timetable {
    /// Creates an empty timetable for a semester, stamped now.
    pub fn new(semester: u32) -> Self {
        Self {
            semester,
            entries: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    /// Sets the entries, sorted into `(day, slot_number)` order.
    pub fn with_entries(mut self, mut entries: Vec<ScheduleEntry>) -> Self {
        entries.sort_by_key(|e| (e.day, e.slot_number));
        self.entries = entries;
        self
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timetable has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries on a given day, in slot order.
    pub fn entries_for_day(&self, day: Weekday) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// All entries assigned to a given faculty member.
    pub fn entries_for_faculty(&self, faculty_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.faculty_id == faculty_id)
            .collect()
    }

    /// All entries for a given subject.
    pub fn entries_for_subject(&self, subject_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.subject_id == subject_id)
            .collect()
    }
}
