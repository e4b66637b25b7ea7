//! MoveTask command

use crate::context::BoardContext;
use crate::types::{ColumnId, Task, TaskId};

/// Move a task to a different column.
///
/// This is the status-reassignment half of a drag-and-drop gesture, so it
/// is total: a task id that no longer resolves is a benign race with a
/// delete and the move silently does nothing. The target column id is
/// trusted as-is - no existence check - matching the permissive contract
/// of the source interaction.
#[derive(Debug)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// The destination column
    pub column: ColumnId,
}

impl MoveTask {
    /// Create a new MoveTask command
    pub fn new(id: impl Into<TaskId>, column: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
        }
    }

    /// Reassign the task's status. Returns the moved task, or `None` when
    /// the id no longer resolves. Moving a task to the column it is
    /// already in succeeds and changes nothing.
    pub fn execute(&self, ctx: &mut BoardContext) -> Option<Task> {
        let Some(task) = ctx.store_mut().get_mut(&self.id) else {
            tracing::debug!(task = %self.id, "move ignored: task no longer exists");
            return None;
        };

        if task.status != self.column {
            tracing::debug!(task = %self.id, from = %task.status, to = %self.column, "task moved");
            task.status = self.column.clone();
        }
        Some(task.clone())
    }
}
