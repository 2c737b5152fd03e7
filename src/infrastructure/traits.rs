//! Collaborator traits for the store's external seams
//!
//! These abstract the clock and identifier supply, allowing the store to be
//! tested with deterministic implementations.

use chrono::{DateTime, Utc};

use crate::domain::entities::NodeId;

/// Wall-clock abstraction.
///
/// Expected to be monotonic enough that successive calls do not go
/// backwards; timestamp ordering across updates relies on it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Supplies a fresh, globally unique identifier for each created node.
///
/// Uniqueness across the whole forest is the generator's contract; the
/// store does not re-check it.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> NodeId;
}
