//! Timetable storage collaborator.
//!
//! The engine computes timetables; persisting them is delegated to a
//! [`TimetableStore`]. A generation run fully replaces the previous
//! schedule for every semester it produces (upsert keyed by semester),
//! never merges. [`InMemoryStore`] ships for tests and local use;
//! database-backed implementations live in outer layers.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::models::Timetable;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors reported by a timetable store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No timetable stored under the requested key.
    #[error("not found: {0}")]
    NotFound(String),

    /// Backend failure (connection, query, serialization, ...).
    #[error("storage error: {0}")]
    Backend(String),
}

/// Storage collaborator for generated timetables.
///
/// Implementations must treat `upsert` as a full replace keyed by
/// semester number.
pub trait TimetableStore {
    /// Inserts or fully replaces the timetable for its semester.
    fn upsert(&self, timetable: &Timetable) -> StoreResult<()>;

    /// Fetches the timetable for a semester, if one is stored.
    fn get(&self, semester: u32) -> StoreResult<Option<Timetable>>;

    /// All stored timetables, ordered by semester.
    fn list(&self) -> StoreResult<Vec<Timetable>>;
}

/// In-memory timetable store.
///
/// Cloning shares the underlying map, so a clone observes upserts made
/// through the original.
///
/// # Example
///
/// ```
/// use u_timetable::models::Timetable;
/// use u_timetable::store::{InMemoryStore, TimetableStore};
///
/// let store = InMemoryStore::new();
/// store.upsert(&Timetable::new(1)).unwrap();
/// store.upsert(&Timetable::new(1)).unwrap();
///
/// assert_eq!(store.list().unwrap().len(), 1);
/// assert!(store.get(1).unwrap().is_some());
/// assert!(store.get(2).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: Arc<RwLock<HashMap<u32, Timetable>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored timetables.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl TimetableStore for InMemoryStore {
    fn upsert(&self, timetable: &Timetable) -> StoreResult<()> {
        self.data
            .write()
            .insert(timetable.semester, timetable.clone());
        Ok(())
    }

    fn get(&self, semester: u32) -> StoreResult<Option<Timetable>> {
        Ok(self.data.read().get(&semester).cloned())
    }

    fn list(&self) -> StoreResult<Vec<Timetable>> {
        let mut all: Vec<Timetable> = self.data.read().values().cloned().collect();
        all.sort_by_key(|t| t.semester);
        Ok(all)
    }
}
