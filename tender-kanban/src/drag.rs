//! Drag-and-drop gesture state machine.
//!
//! One session coordinates one move gesture: a card starts dragging, may
//! hover over column drop surfaces (highlight only, no mutation), and ends
//! either dropped on a column or cancelled. The session stores only the
//! dragged task's id - the destination column fully determines the new
//! status, so no column of origin is recorded.

use crate::types::{ColumnId, TaskId};

/// The phase of the in-flight gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    Idle,
    /// A card is being dragged.
    Dragging { task: TaskId },
    /// The drag point is over a column's drop surface.
    HoveringColumn { task: TaskId, column: ColumnId },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Transient state for at most one active drag gesture.
#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current gesture phase.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }

    /// The task being dragged, if a gesture is active.
    pub fn dragged_task(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { task } | DragState::HoveringColumn { task, .. } => Some(task),
        }
    }

    /// The column whose drop surface is under the drag point, if any.
    /// Drives the highlight affordance only.
    pub fn hovered_column(&self) -> Option<&ColumnId> {
        match &self.state {
            DragState::HoveringColumn { column, .. } => Some(column),
            _ => None,
        }
    }

    /// Begin dragging a card. A gesture already in flight is replaced; the
    /// source toolkit leaves that case undefined, so the session just keeps
    /// itself total.
    pub fn begin(&mut self, task: TaskId) {
        if !self.is_idle() {
            tracing::warn!(task = %task, "drag started while a gesture was in flight; replacing it");
        }
        self.state = DragState::Dragging { task };
    }

    /// The drag point entered a column's drop surface.
    pub fn hover(&mut self, column: ColumnId) {
        match std::mem::take(&mut self.state) {
            DragState::Idle => {
                tracing::debug!(column = %column, "hover ignored: no gesture in progress");
            }
            DragState::Dragging { task } | DragState::HoveringColumn { task, .. } => {
                self.state = DragState::HoveringColumn { task, column };
            }
        }
    }

    /// The drag point left the hovered drop surface. The gesture itself
    /// continues: Hovering goes back to Dragging, not Idle.
    pub fn leave(&mut self) {
        if let DragState::HoveringColumn { task, .. } = std::mem::take(&mut self.state) {
            self.state = DragState::Dragging { task };
        }
    }

    /// The card was released over a column's drop surface. Consumes the
    /// gesture and returns the task to move - at most once per gesture.
    /// Returns `None` when no gesture was in progress.
    pub fn drop_on(&mut self, column: &ColumnId) -> Option<TaskId> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => {
                tracing::debug!(column = %column, "drop ignored: no gesture in progress");
                None
            }
            DragState::Dragging { task } | DragState::HoveringColumn { task, .. } => Some(task),
        }
    }

    /// The gesture ended without a valid drop target. No mutation results.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
