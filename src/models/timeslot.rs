//! Weekday and time slot models.
//!
//! A time slot is a fixed, uniquely numbered period within a day. Slot
//! numbers define a total order within the day; `(day, slot_number)` is
//! unique across a catalog. Adjacency means consecutive slot numbers —
//! a numbering gap (e.g., a lunch break encoded as a skipped number) is
//! deliberately non-adjacent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the teaching week.
///
/// Saturday is part of the type but only appears in catalogs that
/// actually schedule on it. Variant order is chronological, so the
/// derived `Ord` sorts days Monday-first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All recognized weekdays, Monday through Saturday.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Day name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed weekly time slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Day of week.
    pub day: Weekday,
    /// Position within the day (total order; unique per day).
    pub slot_number: u32,
    /// Start time of day (e.g., "09:00").
    pub start_time: String,
    /// End time of day (e.g., "10:00").
    pub end_time: String,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(id: impl Into<String>, day: Weekday, slot_number: u32) -> Self {
        Self {
            id: id.into(),
            day,
            slot_number,
            start_time: String::new(),
            end_time: String::new(),
        }
    }

    /// Sets the start and end times of day.
    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Whether `other` is the slot immediately after this one on the same day.
    pub fn is_adjacent_to(&self, other: &TimeSlot) -> bool {
        self.day == other.day && other.slot_number == self.slot_number + 1
    }
}
