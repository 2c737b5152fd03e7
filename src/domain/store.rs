//! The discussion store: question creation, lookup, and tree mutation.

use tracing::{debug, instrument};

use crate::domain::arena::{NodeArena, NodePayload, NodeRecord};
use crate::domain::entities::{
    Comment, NewComment, NewQuestion, Node, NodeId, Question, QuestionPatch,
};
use crate::domain::error::{StoreError, StoreResult};
use crate::infrastructure::system::{SystemClock, UuidIdGenerator};
use crate::infrastructure::traits::{Clock, IdGenerator};

/// In-memory forest of question threads.
///
/// Single logical writer, process lifetime, no persistence. Nodes are never
/// removed or reparented; children sequences only grow. Callers that share a
/// store across threads must wrap it in one exclusive lock.
pub struct DiscussionStore {
    forest: NodeArena,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl Default for DiscussionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscussionStore {
    /// Creates an empty store with the system clock and uuid identifiers.
    pub fn new() -> Self {
        Self::with_collaborators(Box::new(SystemClock), Box::new(UuidIdGenerator))
    }

    /// Creates an empty store with explicit clock and identifier collaborators.
    pub fn with_collaborators(clock: Box<dyn Clock>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            forest: NodeArena::new(),
            clock,
            ids,
        }
    }

    /// Creates a new question root with empty children and returns its id.
    ///
    /// `created_at` and `updated_at` are both set to the clock's now.
    #[instrument(level = "debug", skip(self, new), fields(title = %new.title))]
    pub fn create_question(&mut self, new: NewQuestion) -> NodeId {
        let id = self.ids.generate();
        let now = self.clock.now();
        let record = NodeRecord {
            id: id.clone(),
            author: new.author,
            created_at: now,
            updated_at: now,
            payload: NodePayload::Question {
                title: new.title,
                description: new.description,
                status: new.status,
            },
            children: Vec::new(),
        };
        self.forest.insert_root(record);
        debug!(%id, "created question");
        id
    }

    /// Looks up a node of either kind by identifier.
    ///
    /// Returns an owned view carrying the full subtree, or `None` when no
    /// node anywhere in the forest matches. A miss is a negative result,
    /// not a failure.
    #[instrument(level = "debug", skip(self))]
    pub fn find(&self, id: &NodeId) -> Option<Node> {
        let idx = self.forest.resolve(id)?;
        self.forest.node_view(idx)
    }

    /// Direct children of the node resolved by `id`, in arrival order.
    ///
    /// An unresolvable id yields an empty sequence, not an error.
    #[instrument(level = "debug", skip(self))]
    pub fn children_of(&self, id: &NodeId) -> Vec<Comment> {
        match self.forest.resolve(id).and_then(|idx| self.forest.get(idx)) {
            Some(record) => self.forest.child_views(&record.children),
            None => Vec::new(),
        }
    }

    /// All question roots in creation order, each with its full subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn questions(&self) -> Vec<Question> {
        self.forest
            .roots()
            .iter()
            .filter_map(|&idx| self.forest.question_view(idx))
            .collect()
    }

    /// Root-only lookup: resolves `id` only if it names a question.
    #[instrument(level = "debug", skip(self))]
    pub fn question(&self, id: &NodeId) -> Option<Question> {
        let idx = self.forest.resolve(id)?;
        self.forest.question_view(idx)
    }

    /// Attaches a new comment under the node resolved by `parent_id`.
    ///
    /// The parent may be a question or a comment. If it does not resolve the
    /// forest is left untouched and `ParentNotFound` is returned.
    #[instrument(level = "debug", skip(self, new))]
    pub fn attach_comment(&mut self, parent_id: &NodeId, new: NewComment) -> StoreResult<NodeId> {
        let parent_idx = self
            .forest
            .resolve(parent_id)
            .ok_or_else(|| StoreError::ParentNotFound(parent_id.clone()))?;
        let id = self.ids.generate();
        let now = self.clock.now();
        let record = NodeRecord {
            id: id.clone(),
            author: new.author,
            created_at: now,
            updated_at: now,
            payload: NodePayload::Comment {
                parent_id: parent_id.clone(),
                content: new.content,
            },
            children: Vec::new(),
        };
        self.forest.insert_child(parent_idx, record);
        debug!(%id, %parent_id, "attached comment");
        Ok(id)
    }

    /// Overwrites the supplied fields of a question and advances `updated_at`.
    ///
    /// Fields left `None` in the patch are unchanged. Fails with `NotFound`
    /// when `id` does not resolve to a question.
    #[instrument(level = "debug", skip(self, patch))]
    pub fn update_question(&mut self, id: &NodeId, patch: QuestionPatch) -> StoreResult<()> {
        let now = self.clock.now();
        let record = self
            .forest
            .resolve(id)
            .and_then(|idx| self.forest.get_mut(idx))
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        match &mut record.payload {
            NodePayload::Question {
                title,
                description,
                status,
            } => {
                if let Some(new_title) = patch.title {
                    *title = new_title;
                }
                if let Some(new_description) = patch.description {
                    *description = new_description;
                }
                if let Some(new_status) = patch.status {
                    *status = new_status;
                }
                if let Some(new_author) = patch.author {
                    record.author = new_author;
                }
                record.updated_at = now;
                debug!(%id, "updated question");
                Ok(())
            }
            NodePayload::Comment { .. } => Err(StoreError::NotFound(id.clone())),
        }
    }

    /// Replaces a comment's content and advances `updated_at`.
    ///
    /// Fails with `NotFound` when `id` does not resolve to a comment.
    #[instrument(level = "debug", skip(self, content))]
    pub fn update_comment(&mut self, id: &NodeId, content: impl Into<String>) -> StoreResult<()> {
        let now = self.clock.now();
        let record = self
            .forest
            .resolve(id)
            .and_then(|idx| self.forest.get_mut(idx))
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        match &mut record.payload {
            NodePayload::Comment {
                content: stored, ..
            } => {
                *stored = content.into();
                record.updated_at = now;
                debug!(%id, "updated comment");
                Ok(())
            }
            NodePayload::Question { .. } => Err(StoreError::NotFound(id.clone())),
        }
    }

    /// Identifiers of every node in deterministic pre-order: questions in
    /// creation order, each followed by its comment subtree left to right.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.forest.iter().map(|(_, record)| record.id.clone()).collect()
    }

    /// Total number of nodes in the forest, questions and comments combined.
    pub fn node_count(&self) -> usize {
        self.forest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }
}
