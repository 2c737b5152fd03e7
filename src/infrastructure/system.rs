//! Production collaborator implementations

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::NodeId;
use crate::infrastructure::traits::{Clock, IdGenerator};

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random v4 uuid identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> NodeId {
        NodeId(Uuid::new_v4().to_string())
    }
}
