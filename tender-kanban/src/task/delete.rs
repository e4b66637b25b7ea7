//! DeleteTask command

use crate::context::BoardContext;
use crate::types::TaskId;

/// Delete a task from the board.
///
/// Idempotent: deleting an id that is already gone succeeds without
/// effect. The presentation layer owns the confirmation gate; by the time
/// this command runs, consent has been obtained. Deleting the currently
/// selected task also clears the selection - the two mutations go through
/// this single entry point so the selection can never dangle.
#[derive(Debug)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

impl DeleteTask {
    /// Create a new DeleteTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    /// Remove the task. Returns `true` when a task was removed, `false`
    /// when the id was already absent (still success).
    pub fn execute(&self, ctx: &mut BoardContext) -> bool {
        if !ctx.store_mut().remove(&self.id) {
            tracing::debug!(task = %self.id, "delete ignored: task already absent");
            return false;
        }

        if ctx.selection_mut().clear_if(&self.id) {
            tracing::debug!(task = %self.id, "selection cleared with deleted task");
        }
        tracing::debug!(task = %self.id, "task deleted");
        true
    }
}
