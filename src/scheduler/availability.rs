//! Availability tracking for one generation run.
//!
//! The tracker is the only mutable shared state of a run: per-`(day,
//! slot)` occupancy for faculty and rooms, plus per-faculty daily and
//! total load counters. One tracker is created per run and threaded
//! through all semesters, which is what prevents one semester's schedule
//! from double-booking a faculty member or room another semester already
//! claimed in the same run.
//!
//! Pure in-memory state, no I/O. The tracker is pool-agnostic: it books
//! resource IDs without knowing whether they are lecture rooms or labs.

use std::collections::{HashMap, HashSet};

use crate::models::Weekday;

type SlotKey = (Weekday, u32);

/// Per-faculty load counters.
#[derive(Debug, Clone, Default)]
struct FacultyLoad {
    total: u32,
    per_day: HashMap<Weekday, u32>,
}

/// Booking state shared across all semesters of a generation run.
///
/// # Contract
///
/// `book` must only be called after `is_available` returned true for the
/// same tuple; it does not re-check. `release` must mirror an earlier
/// `book` exactly.
///
/// # Example
///
/// ```
/// use u_timetable::models::Weekday;
/// use u_timetable::scheduler::AvailabilityTracker;
///
/// let mut tracker = AvailabilityTracker::new(2);
/// tracker.register_faculty("F1");
///
/// assert!(tracker.is_available(Weekday::Monday, 1, "F1", "R1"));
/// tracker.book(Weekday::Monday, 1, "F1", "R1");
///
/// // Same faculty, same slot: taken.
/// assert!(!tracker.is_available(Weekday::Monday, 1, "F1", "R2"));
/// // Same room, same slot: taken.
/// assert!(!tracker.is_available(Weekday::Monday, 1, "F2", "R1"));
/// ```
#[derive(Debug, Clone)]
pub struct AvailabilityTracker {
    occupied_faculty: HashMap<SlotKey, HashSet<String>>,
    occupied_resources: HashMap<SlotKey, HashSet<String>>,
    load: HashMap<String, FacultyLoad>,
    max_per_day: u32,
}

impl AvailabilityTracker {
    /// Creates a tracker with the given per-day session cap.
    pub fn new(max_per_day: u32) -> Self {
        Self {
            occupied_faculty: HashMap::new(),
            occupied_resources: HashMap::new(),
            load: HashMap::new(),
            max_per_day,
        }
    }

    /// Zero-initializes load counters for a faculty member across every
    /// recognized weekday.
    pub fn register_faculty(&mut self, faculty_id: &str) {
        let entry = self.load.entry(faculty_id.to_string()).or_default();
        for day in Weekday::ALL {
            entry.per_day.entry(day).or_insert(0);
        }
    }

    /// Whether both the faculty member and the resource are free at
    /// `(day, slot)` and the faculty's per-day load is below the cap.
    pub fn is_available(&self, day: Weekday, slot: u32, faculty_id: &str, resource_id: &str) -> bool {
        let key = (day, slot);
        if let Some(set) = self.occupied_faculty.get(&key) {
            if set.contains(faculty_id) {
                return false;
            }
        }
        if let Some(set) = self.occupied_resources.get(&key) {
            if set.contains(resource_id) {
                return false;
            }
        }
        self.day_load(faculty_id, day) < self.max_per_day
    }

    /// Records a commitment and bumps the faculty's load counters.
    pub fn book(&mut self, day: Weekday, slot: u32, faculty_id: &str, resource_id: &str) {
        let key = (day, slot);
        self.occupied_faculty
            .entry(key)
            .or_default()
            .insert(faculty_id.to_string());
        self.occupied_resources
            .entry(key)
            .or_default()
            .insert(resource_id.to_string());

        let load = self.load.entry(faculty_id.to_string()).or_default();
        load.total += 1;
        *load.per_day.entry(day).or_insert(0) += 1;
    }

    /// Reverses a prior `book`, freeing the slot and restoring the
    /// counters. Used to roll back a failed placement attempt.
    pub fn release(&mut self, day: Weekday, slot: u32, faculty_id: &str, resource_id: &str) {
        let key = (day, slot);
        if let Some(set) = self.occupied_faculty.get_mut(&key) {
            set.remove(faculty_id);
        }
        if let Some(set) = self.occupied_resources.get_mut(&key) {
            set.remove(resource_id);
        }
        if let Some(load) = self.load.get_mut(faculty_id) {
            load.total = load.total.saturating_sub(1);
            if let Some(day_count) = load.per_day.get_mut(&day) {
                *day_count = day_count.saturating_sub(1);
            }
        }
    }

    /// Total sessions booked for a faculty member in this run.
    pub fn total_load(&self, faculty_id: &str) -> u32 {
        self.load.get(faculty_id).map(|l| l.total).unwrap_or(0)
    }

    /// Sessions booked for a faculty member on one day.
    pub fn day_load(&self, faculty_id: &str, day: Weekday) -> u32 {
        self.load
            .get(faculty_id)
            .and_then(|l| l.per_day.get(&day))
            .copied()
            .unwrap_or(0)
    }
}
