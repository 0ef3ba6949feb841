//! Error handling for RoomPlan.
//!
//! Interactive operations never fail for ordinary sequences: referential
//! misses are silent no-ops and degenerate geometry is clamped at the
//! mutation boundary. The error types here cover the serialization
//! boundary, where a host can hand the engine a document it cannot accept.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Planner error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// The document carries a schema version newer than this engine
    /// understands. Older versions are upgraded by the persistence
    /// collaborator before they reach the engine.
    #[error("Unsupported document version {found} (newest supported is {supported})")]
    UnsupportedVersion {
        /// The version tag found in the document.
        found: u32,
        /// The newest version this engine accepts.
        supported: u32,
    },
}

/// Result type alias using [`PlannerError`].
pub type Result<T> = std::result::Result<T, PlannerError>;
