//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::NodeId;

/// Store errors represent recoverable negative outcomes.
///
/// A failed operation leaves the forest exactly as it was; every mutation
/// is a single atomic append or field overwrite.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("node not found: {0}")]
    NotFound(NodeId),

    #[error("comment parent not found: {0}")]
    ParentNotFound(NodeId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
