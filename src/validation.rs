//! Catalog integrity validation.
//!
//! Optional pre-flight checks on a catalog snapshot, separate from the
//! engine's own emptiness check. Detects:
//! - Duplicate IDs (faculty, rooms and labs across both pools, subjects,
//!   time slots)
//! - Duplicate `(day, slot_number)` pairs
//! - Subjects with semester 0
//! - Lab-requiring subjects while the lab pool is empty
//!
//! The engine does not call this itself; callers that ingest untrusted
//! catalogs run it before generation.

use crate::catalog::Catalog;
use crate::models::Weekday;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// Two time slots share the same `(day, slot_number)`.
    DuplicateSlot,
    /// A subject declares semester 0.
    InvalidSemester,
    /// A subject requires a lab but the lab pool is empty.
    MissingLabPool,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog snapshot.
///
/// Checks:
/// 1. No duplicate faculty IDs
/// 2. No duplicate room/lab IDs — the two pools must also be disjoint
/// 3. No duplicate subject IDs
/// 4. No duplicate time-slot IDs or `(day, slot_number)` pairs
/// 5. Every subject's semester is at least 1
/// 6. Lab pool is non-empty when any subject requires a lab
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    let mut faculty_ids = HashSet::new();
    for f in &catalog.faculty {
        if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", f.id),
            ));
        }
    }

    // Rooms and labs book against the same occupancy state, so IDs must
    // be unique across both pools.
    let mut room_ids = HashSet::new();
    for r in catalog.rooms.iter().chain(&catalog.labs) {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut subject_ids = HashSet::new();
    for s in &catalog.subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
        if s.semester == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSemester,
                format!("Subject '{}' declares semester 0", s.id),
            ));
        }
    }

    let mut slot_ids = HashSet::new();
    let mut slot_keys: HashSet<(Weekday, u32)> = HashSet::new();
    for slot in &catalog.time_slots {
        if !slot_ids.insert(slot.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate time slot ID: {}", slot.id),
            ));
        }
        if !slot_keys.insert((slot.day, slot.slot_number)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlot,
                format!("Duplicate slot {} on {}", slot.slot_number, slot.day),
            ));
        }
    }

    if catalog.labs.is_empty() {
        for s in catalog.subjects.iter().filter(|s| s.lab_quota() > 0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingLabPool,
                format!("Subject '{}' requires a lab but no labs are cataloged", s.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
