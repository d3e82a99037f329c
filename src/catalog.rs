//! Catalog snapshot and loader.
//!
//! A [`Catalog`] is the read-only snapshot of faculty, rooms, labs,
//! subjects, and time slots supplied to one generation run. Entities
//! created or modified after the snapshot is taken are not visible to
//! that run.
//!
//! The loader side normalizes the raw collections into the structures
//! the engine consumes: time slots grouped by day (sorted by slot
//! number) and the sorted list of semesters that actually have subjects.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::ScheduleError;
use crate::models::{Faculty, Room, Subject, TimeSlot, Weekday};

/// Input snapshot for one generation run.
///
/// Rooms and labs are two disjoint pools: labs are only scanned for lab
/// sessions. The lab pool may legitimately be empty when no subject in
/// scope requires a lab; every other section is mandatory.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::Catalog;
/// use u_timetable::models::{Faculty, Room, Subject, TimeSlot, Weekday};
///
/// let catalog = Catalog::new()
///     .with_faculty(Faculty::new("F1").with_name("Dr. Rao"))
///     .with_room(Room::lecture("R1").with_capacity(60))
///     .with_subject(Subject::new("S1", 1).without_lab())
///     .with_time_slot(TimeSlot::new("T1", Weekday::Monday, 1).with_times("09:00", "10:00"));
///
/// assert!(catalog.check_complete().is_ok());
/// assert_eq!(catalog.semesters(), vec![1]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Faculty pool.
    pub faculty: Vec<Faculty>,
    /// Lecture room pool.
    pub rooms: Vec<Room>,
    /// Lab pool, disjoint from `rooms`.
    pub labs: Vec<Room>,
    /// Subjects across all semesters.
    pub subjects: Vec<Subject>,
    /// Weekly time slots.
    pub time_slots: Vec<TimeSlot>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculty.push(faculty);
        self
    }

    /// Adds a lecture room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a lab.
    pub fn with_lab(mut self, lab: Room) -> Self {
        self.labs.push(lab);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a time slot.
    pub fn with_time_slot(mut self, slot: TimeSlot) -> Self {
        self.time_slots.push(slot);
        self
    }

    /// Checks that every mandatory section is populated.
    ///
    /// Fails with [`ScheduleError::MissingCatalogData`] naming every empty
    /// section of {faculty, rooms, subjects, time slots}. The lab pool is
    /// not checked here: lab-requiring subjects with no labs available are
    /// reported per subject by the engine instead of failing the run.
    pub fn check_complete(&self) -> Result<(), ScheduleError> {
        let mut sections = Vec::new();
        if self.faculty.is_empty() {
            sections.push("faculty");
        }
        if self.rooms.is_empty() {
            sections.push("rooms");
        }
        if self.subjects.is_empty() {
            sections.push("subjects");
        }
        if self.time_slots.is_empty() {
            sections.push("time slots");
        }
        if sections.is_empty() {
            Ok(())
        } else {
            Err(ScheduleError::MissingCatalogData { sections })
        }
    }

    /// Groups time slots by day, each group sorted by slot number ascending.
    ///
    /// The map is keyed chronologically (Monday first), so iteration order
    /// is deterministic.
    pub fn slots_by_day(&self) -> BTreeMap<Weekday, Vec<TimeSlot>> {
        let mut by_day: BTreeMap<Weekday, Vec<TimeSlot>> = BTreeMap::new();
        for slot in &self.time_slots {
            by_day.entry(slot.day).or_default().push(slot.clone());
        }
        for slots in by_day.values_mut() {
            slots.sort_by_key(|s| s.slot_number);
        }
        by_day
    }

    /// Sorted distinct semesters that have at least one subject.
    pub fn semesters(&self) -> Vec<u32> {
        let set: BTreeSet<u32> = self.subjects.iter().map(|s| s.semester).collect();
        set.into_iter().collect()
    }

    /// Subjects of one semester, in catalog order.
    pub fn subjects_for_semester(&self, semester: u32) -> Vec<&Subject> {
        self.subjects
            .iter()
            .filter(|s| s.semester == semester)
            .collect()
    }
}
