//! Deterministic collaborators for store tests.

use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};

use threadstore::{Clock, DiscussionStore, IdGenerator, NewQuestion, NodeId, QuestionStatus};

/// Clock that advances by one second on every `now()` call, so strict
/// timestamp ordering can be asserted exactly.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: Mutex<i32>,
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self {
            start: Utc.with_ymd_and_hms(2026, 1, 20, 10, 30, 0).unwrap(),
            ticks: Mutex::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().unwrap();
        let now = self.start + Duration::seconds(i64::from(*ticks));
        *ticks += 1;
        now
    }
}

/// Generator producing `node-1`, `node-2`, ... in call order.
#[derive(Default)]
pub struct SequentialIds {
    counter: Mutex<u32>,
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> NodeId {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        NodeId(format!("node-{}", counter))
    }
}

/// Store wired with the deterministic collaborators above.
pub fn deterministic_store() -> DiscussionStore {
    threadstore::util::testing::init_test_setup();
    DiscussionStore::with_collaborators(
        Box::new(SteppingClock::default()),
        Box::new(SequentialIds::default()),
    )
}

/// Question input with recognizable field values.
pub fn sample_question(title: &str) -> NewQuestion {
    NewQuestion {
        title: title.to_string(),
        description: format!("description of {}", title),
        author: "francis".into(),
        status: QuestionStatus::Open,
    }
}
