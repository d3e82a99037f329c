//! Room model.
//!
//! Rooms host teaching sessions. Lecture rooms and labs form two disjoint
//! pools: the catalog carries them separately and the lab pool is only ever
//! scanned for lab sessions. The availability tracker is pool-agnostic and
//! sees room IDs only.

use serde::{Deserialize, Serialize};

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    /// General lecture room.
    Lecture,
    /// Laboratory (hosts 2-slot lab sessions).
    Lab,
}

/// A room or laboratory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier (booking key, unique across both pools).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Pool this room belongs to.
    pub kind: RoomKind,
}

impl Room {
    /// Creates a new room of the given kind.
    pub fn new(id: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            kind,
        }
    }

    /// Creates a lecture room.
    pub fn lecture(id: impl Into<String>) -> Self {
        Self::new(id, RoomKind::Lecture)
    }

    /// Creates a laboratory.
    pub fn lab(id: impl Into<String>) -> Self {
        Self::new(id, RoomKind::Lab)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this room is a laboratory.
    pub fn is_lab(&self) -> bool {
        self.kind == RoomKind::Lab
    }
}
