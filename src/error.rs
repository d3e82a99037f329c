//! Error types for timetable generation.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for timetable operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that abort a generation run.
///
/// A subject that cannot be placed is *not* an error: the run continues
/// and the subject is reported in
/// [`GenerationReport::unscheduled`](crate::scheduler::GenerationReport).
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A mandatory catalog section is empty. Raised before any assignment
    /// work begins; nothing is written.
    #[error("missing catalog data: {}", .sections.join(", "))]
    MissingCatalogData {
        /// The empty sections, in catalog order.
        sections: Vec<&'static str>,
    },

    /// The storage collaborator failed. Propagated unchanged, no retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}
