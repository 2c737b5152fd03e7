//! Domain entities: core data structures

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque node identifier.
///
/// Questions and comments share one identifier namespace: lookup is
/// identifier-only and kind-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

/// Identifier of a user, taken from the caller as-is.
/// The store never validates or authenticates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

/// Workflow state of a question.
///
/// No transition rules are enforced; any status may be set to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionStatus {
    Open,
    Answered,
    Closed,
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionStatus::Open => "Open",
            QuestionStatus::Answered => "Answered",
            QuestionStatus::Closed => "Closed",
        };
        write!(f, "{}", s)
    }
}

/// Owned view of a question root, including its full comment subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: NodeId,
    pub title: String,
    pub description: String,
    pub status: QuestionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: UserId,
    pub children: Vec<Comment>,
}

/// Owned view of a comment, including its reply subtree.
///
/// `parent_id` is a weak back-reference: it records which node this comment
/// replied to, it never implies ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: NodeId,
    pub parent_id: NodeId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: UserId,
    pub children: Vec<Comment>,
}

/// Kind-tagged node view returned by identifier lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Question(Question),
    Comment(Comment),
}

impl Node {
    pub fn id(&self) -> &NodeId {
        match self {
            Node::Question(q) => &q.id,
            Node::Comment(c) => &c.id,
        }
    }

    pub fn author(&self) -> &UserId {
        match self {
            Node::Question(q) => &q.author,
            Node::Comment(c) => &c.author,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Node::Question(q) => q.created_at,
            Node::Comment(c) => c.created_at,
        }
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            Node::Question(q) => q.updated_at,
            Node::Comment(c) => c.updated_at,
        }
    }

    pub fn children(&self) -> &[Comment] {
        match self {
            Node::Question(q) => &q.children,
            Node::Comment(c) => &c.children,
        }
    }

    pub fn as_question(&self) -> Option<&Question> {
        match self {
            Node::Question(q) => Some(q),
            Node::Comment(_) => None,
        }
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Node::Comment(c) => Some(c),
            Node::Question(_) => None,
        }
    }
}

/// Input record for creating a question root.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub title: String,
    pub description: String,
    pub author: UserId,
    pub status: QuestionStatus,
}

/// Input record for attaching a comment under an existing node.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub author: UserId,
}

/// Partial update for a question.
///
/// `None` fields are left unchanged; any subset of the mutable fields may
/// be supplied.
#[derive(Debug, Clone, Default)]
pub struct QuestionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<QuestionStatus>,
    pub author: Option<UserId>,
}
