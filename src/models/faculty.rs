//! Faculty model.
//!
//! A faculty member who can be assigned lecture and lab sessions.
//! The `id` is the unique key the availability tracker books against.

use serde::{Deserialize, Serialize};

/// A faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier (booking key).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Department the faculty member belongs to.
    pub department: String,
}

impl Faculty {
    /// Creates a new faculty member with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            department: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }
}
