//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no wire format).

pub mod arena;
pub mod entities;
pub mod error;
pub mod store;

pub use arena::{NodeArena, NodePayload, NodeRecord};
pub use entities::*;
pub use error::{StoreError, StoreResult};
pub use store::DiscussionStore;
