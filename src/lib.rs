//! threadstore: an in-memory threaded discussion store.
//!
//! A forest of top-level questions, each the root of an arbitrarily deep
//! tree of comments. Supports creation, kind-agnostic lookup by identifier
//! across the whole forest, attachment of a comment under any existing node,
//! and partial in-place updates that advance the last-modified timestamp.
//!
//! The store is volatile and process-lifetime only; persistence, identity,
//! and transport are the caller's concern. Construct a [`DiscussionStore`]
//! explicitly and pass it to whatever needs it — there is no singleton.
//!
//! ```
//! use threadstore::{DiscussionStore, NewComment, NewQuestion, QuestionStatus};
//!
//! let mut store = DiscussionStore::new();
//! let q = store.create_question(NewQuestion {
//!     title: "How do I center a div?".into(),
//!     description: "Tried margin: auto, no luck vertically.".into(),
//!     author: "francis".into(),
//!     status: QuestionStatus::Open,
//! });
//! let c = store
//!     .attach_comment(&q, NewComment { content: "Use flexbox.".into(), author: "yoga".into() })
//!     .unwrap();
//! assert_eq!(store.children_of(&q).len(), 1);
//! assert!(store.find(&c).is_some());
//! ```

pub mod domain;
pub mod infrastructure;
pub mod util;

pub use domain::{
    Comment, DiscussionStore, NewComment, NewQuestion, Node, NodeId, Question, QuestionPatch,
    QuestionStatus, StoreError, StoreResult, UserId,
};
pub use infrastructure::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
