//! Subject model.
//!
//! A subject taught in a specific semester, with weekly session quotas:
//! a number of lectures (default 3) and, when the subject has a lab
//! component, a number of 2-slot lab sessions (default 1).

use serde::{Deserialize, Serialize};

/// A subject to be scheduled for one semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Subject code (e.g., "CS201").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Semester this subject belongs to (1..N).
    pub semester: u32,
    /// Required lecture sessions per week.
    pub lectures_per_week: u32,
    /// Required lab sessions per week. Ignored when `requires_lab` is false.
    pub labs_per_week: u32,
    /// Whether the subject has a lab component at all.
    pub requires_lab: bool,
}

impl Subject {
    /// Creates a new subject for the given semester with default quotas
    /// (3 lectures, 1 lab).
    pub fn new(id: impl Into<String>, semester: u32) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            name: String::new(),
            semester,
            lectures_per_week: 3,
            labs_per_week: 1,
            requires_lab: true,
        }
    }

    /// Sets the subject code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weekly lecture quota.
    pub fn with_lectures(mut self, lectures_per_week: u32) -> Self {
        self.lectures_per_week = lectures_per_week;
        self
    }

    /// Sets the weekly lab quota.
    pub fn with_labs(mut self, labs_per_week: u32) -> Self {
        self.labs_per_week = labs_per_week;
        self
    }

    /// Marks the subject as having no lab component.
    pub fn without_lab(mut self) -> Self {
        self.requires_lab = false;
        self.labs_per_week = 0;
        self
    }

    /// Effective number of lab sessions to place per week.
    pub fn lab_quota(&self) -> u32 {
        if self.requires_lab {
            self.labs_per_week
        } else {
            0
        }
    }
}
