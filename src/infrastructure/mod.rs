//! Infrastructure layer: collaborator seams and their production impls

pub mod system;
pub mod traits;

pub use system::{SystemClock, UuidIdGenerator};
pub use traits::{Clock, IdGenerator};
