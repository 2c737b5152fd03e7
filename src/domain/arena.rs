//! Arena-backed storage for the discussion forest.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::{Comment, Node, NodeId, Question, QuestionStatus, UserId};

/// Kind-specific fields of a stored node.
#[derive(Debug, Clone)]
pub enum NodePayload {
    Question {
        title: String,
        description: String,
        status: QuestionStatus,
    },
    Comment {
        /// Weak back-reference to the node this comment replied to
        parent_id: NodeId,
        content: String,
    },
}

/// A stored node record.
///
/// `children` holds arena handles, never owned nodes; child handles always
/// point at comment records.
#[derive(Debug)]
pub struct NodeRecord {
    pub id: NodeId,
    pub author: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub payload: NodePayload,
    pub children: Vec<Index>,
}

impl NodeRecord {
    pub fn is_question(&self) -> bool {
        matches!(self.payload, NodePayload::Question { .. })
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.payload, NodePayload::Comment { .. })
    }
}

/// Arena-based forest of question trees.
///
/// All records live in one arena; roots are tracked in creation order and an
/// identifier index gives O(1) handle resolution. Records are never removed
/// and children only grow, so handles stay valid for the arena's lifetime.
#[derive(Debug)]
pub struct NodeArena {
    arena: Arena<NodeRecord>,
    /// Question roots in creation order
    roots: Vec<Index>,
    /// Identifier to handle, one namespace for questions and comments
    index: HashMap<NodeId, Index>,
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts a record as a new question root.
    #[instrument(level = "trace", skip(self, record), fields(id = %record.id))]
    pub fn insert_root(&mut self, record: NodeRecord) -> Index {
        let id = record.id.clone();
        let idx = self.arena.insert(record);
        self.roots.push(idx);
        self.index.insert(id, idx);
        idx
    }

    /// Inserts a record as a child of `parent`, appending to its children.
    #[instrument(level = "trace", skip(self, record), fields(id = %record.id))]
    pub fn insert_child(&mut self, parent: Index, record: NodeRecord) -> Index {
        let id = record.id.clone();
        let idx = self.arena.insert(record);
        if let Some(parent_record) = self.arena.get_mut(parent) {
            parent_record.children.push(idx);
        }
        self.index.insert(id, idx);
        idx
    }

    /// Resolves an identifier to its arena handle.
    #[instrument(level = "trace", skip(self))]
    pub fn resolve(&self, id: &NodeId) -> Option<Index> {
        self.index.get(id).copied()
    }

    pub fn get(&self, idx: Index) -> Option<&NodeRecord> {
        self.arena.get(idx)
    }

    pub fn get_mut(&mut self, idx: Index) -> Option<&mut NodeRecord> {
        self.arena.get_mut(idx)
    }

    /// Question roots in creation order.
    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    /// Number of nodes in the forest, questions and comments combined.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order iterator over the whole forest: roots in creation order,
    /// within each tree a parent before its children, children left to right.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIter {
        PreOrderIter::new(self)
    }

    /// Materializes the full view of the node at `idx`.
    #[instrument(level = "trace", skip(self))]
    pub fn node_view(&self, idx: Index) -> Option<Node> {
        let record = self.arena.get(idx)?;
        match record.payload {
            NodePayload::Question { .. } => self.question_view(idx).map(Node::Question),
            NodePayload::Comment { .. } => self.comment_view(idx).map(Node::Comment),
        }
    }

    /// Materializes a question view including its full comment subtree.
    #[instrument(level = "trace", skip(self))]
    pub fn question_view(&self, idx: Index) -> Option<Question> {
        let record = self.arena.get(idx)?;
        match &record.payload {
            NodePayload::Question {
                title,
                description,
                status,
            } => Some(Question {
                id: record.id.clone(),
                title: title.clone(),
                description: description.clone(),
                status: *status,
                created_at: record.created_at,
                updated_at: record.updated_at,
                author: record.author.clone(),
                children: self.child_views(&record.children),
            }),
            NodePayload::Comment { .. } => None,
        }
    }

    /// Materializes a comment view including its reply subtree.
    #[instrument(level = "trace", skip(self))]
    pub fn comment_view(&self, idx: Index) -> Option<Comment> {
        let record = self.arena.get(idx)?;
        match &record.payload {
            NodePayload::Comment { parent_id, content } => Some(Comment {
                id: record.id.clone(),
                parent_id: parent_id.clone(),
                content: content.clone(),
                created_at: record.created_at,
                updated_at: record.updated_at,
                author: record.author.clone(),
                children: self.child_views(&record.children),
            }),
            NodePayload::Question { .. } => None,
        }
    }

    /// Materializes views for the direct children of a record, in stored order.
    pub fn child_views(&self, children: &[Index]) -> Vec<Comment> {
        children
            .iter()
            .filter_map(|&child| self.comment_view(child))
            .collect()
    }
}

pub struct PreOrderIter<'a> {
    arena: &'a NodeArena,
    stack: Vec<Index>,
}

impl<'a> PreOrderIter<'a> {
    fn new(arena: &'a NodeArena) -> Self {
        // Roots pushed in reverse so creation order pops first
        let stack = arena.roots.iter().rev().copied().collect();
        Self { arena, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (Index, &'a NodeRecord);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let record = self.arena.get(current)?;
        // Push children in reverse order for left-to-right traversal
        for &child in record.children.iter().rev() {
            self.stack.push(child);
        }
        Some((current, record))
    }
}
