//! BoardContext - all core state behind one orchestration point.
//!
//! The context owns the task store, the drag session, the selection state,
//! and the read-only catalogs. It provides access primitives and the
//! cross-component wiring (a drop triggers exactly one move; a delete
//! clears a matching selection); the mutation commands do the rest of the
//! work. No ambient singletons: everything a component needs is reached
//! through the context it is handed.

use crate::board::BoardView;
use crate::catalog::{AssigneeCatalog, ColumnCatalog};
use crate::defaults;
use crate::drag::DragSession;
use crate::error::Result;
use crate::selection::SelectionState;
use crate::store::TaskStore;
use crate::task::MoveTask;
use crate::types::{Assignee, Column, ColumnId, Task, TaskId};
use serde_json::Value;

/// Context passed to every command - provides access, not logic.
pub struct BoardContext {
    columns: ColumnCatalog,
    assignees: AssigneeCatalog,
    store: TaskStore,
    drag: DragSession,
    selection: SelectionState,
}

impl BoardContext {
    /// Create a context over the given catalogs with an empty task store.
    ///
    /// # Panics
    ///
    /// Panics if either catalog is empty (see [`ColumnCatalog::new`]).
    pub fn new(columns: Vec<Column>, assignees: Vec<Assignee>) -> Self {
        Self {
            columns: ColumnCatalog::new(columns),
            assignees: AssigneeCatalog::new(assignees),
            store: TaskStore::new(),
            drag: DragSession::new(),
            selection: SelectionState::new(),
        }
    }

    /// Create a context over the built-in catalogs with an empty store.
    pub fn with_defaults() -> Self {
        Self::new(defaults::default_columns(), defaults::default_assignees())
    }

    /// Create a context over the built-in catalogs, seeded with the demo
    /// backlog.
    pub fn with_demo_data() -> Self {
        let mut ctx = Self::with_defaults();
        for task in defaults::sample_tasks(&ctx.assignees).into_iter().rev() {
            ctx.store.insert_front(task);
        }
        ctx
    }

    // =========================================================================
    // Catalog access
    // =========================================================================

    /// The static column catalog.
    pub fn columns(&self) -> &ColumnCatalog {
        &self.columns
    }

    /// The static assignee catalog.
    pub fn assignees(&self) -> &AssigneeCatalog {
        &self.assignees
    }

    // =========================================================================
    // Task reads
    // =========================================================================

    /// The full ordered task collection (most-recent-first).
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// An owned snapshot of the full ordered collection.
    pub fn snapshot(&self) -> Vec<Task> {
        self.store.snapshot()
    }

    /// Look up a task by id.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// The derived board partition for the given search query.
    pub fn board_view(&self, query: &str) -> BoardView {
        BoardView::build(&self.columns, self.store.tasks(), query)
    }

    /// The full task collection as a JSON value, for presentation-layer
    /// snapshots.
    pub fn snapshot_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.store.tasks())?)
    }

    pub(crate) fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub(crate) fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Open a task for detailed viewing. Selecting an id that no longer
    /// resolves is a benign race and is ignored, so the selection can never
    /// reference an absent task.
    pub fn select(&mut self, id: TaskId) -> bool {
        if !self.store.contains(&id) {
            tracing::debug!(task = %id, "select ignored: task no longer exists");
            return false;
        }
        self.selection.select(id);
        true
    }

    /// Close the detail view.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The currently selected task, if any.
    pub fn selected_task(&self) -> Option<&Task> {
        self.selection.selected().and_then(|id| self.store.get(id))
    }

    // =========================================================================
    // Drag-and-drop protocol
    // =========================================================================

    /// The drag session, for reading the highlight affordance.
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// A card started dragging.
    pub fn begin_drag(&mut self, task: TaskId) {
        self.drag.begin(task);
    }

    /// The drag point entered a column's drop surface.
    pub fn hover_column(&mut self, column: ColumnId) {
        self.drag.hover(column);
    }

    /// The drag point left the hovered drop surface.
    pub fn leave_column(&mut self) {
        self.drag.leave();
    }

    /// The card was released over a column's drop surface. Triggers exactly
    /// one move for the gesture, then the session is idle again. Returns
    /// the moved task, or `None` when there was no gesture or the task was
    /// deleted mid-flight.
    pub fn drop_on(&mut self, column: ColumnId) -> Option<Task> {
        let task = self.drag.drop_on(&column)?;
        MoveTask::new(task, column).execute(self)
    }

    /// The gesture ended without a valid drop target.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }
}
