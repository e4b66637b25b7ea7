//! AddComment command

use crate::context::BoardContext;
use crate::types::{AssigneeId, Comment, TaskId};

/// Add a comment to a task's thread.
///
/// The comment gets a fresh id and a UTC timestamp; the author is resolved
/// from the assignee catalog. Like the other mid-gesture mutations this is
/// total: a task id that no longer resolves means the task was deleted
/// while the form was open, and the append silently does nothing.
#[derive(Debug)]
pub struct AddComment {
    /// The task ID to comment on
    pub task_id: TaskId,
    /// The comment body
    pub body: String,
    /// The author of the comment
    pub author: AssigneeId,
}

impl AddComment {
    pub fn new(
        task_id: impl Into<TaskId>,
        body: impl Into<String>,
        author: impl Into<AssigneeId>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            body: body.into(),
            author: author.into(),
        }
    }

    /// Append the comment. Returns the stored comment, or `None` when the
    /// task no longer exists (still success).
    ///
    /// # Panics
    ///
    /// Panics if the author is not in the assignee catalog - comment forms
    /// author as the signed-in catalog user, so an unknown id is a caller
    /// bug.
    pub fn execute(&self, ctx: &mut BoardContext) -> Option<Comment> {
        let author = ctx
            .assignees()
            .get(&self.author)
            .unwrap_or_else(|| panic!("comment author must be in the catalog: {}", self.author))
            .clone();

        let Some(task) = ctx.store_mut().get_mut(&self.task_id) else {
            tracing::debug!(task = %self.task_id, "comment ignored: task no longer exists");
            return None;
        };

        let comment = Comment::new(&self.body, author);
        task.push_comment(comment.clone());
        tracing::debug!(task = %self.task_id, comment = %comment.id, "comment added");
        Some(comment)
    }
}
