//! In-memory kanban board engine
//!
//! This crate is the state core behind the Tender Tasks board: the entity
//! model, the mutation commands that keep it consistent, the drag-and-drop
//! protocol that drives column reassignment, and the search-filter
//! contract. The presentation layer (cards, columns, modals) is an external
//! collaborator that reads this core's data and invokes its operations.
//!
//! ## Overview
//!
//! - **One context = one board** - a [`BoardContext`] owns all state; no
//!   ambient singletons
//! - **Catalog-driven** - columns and assignees are static reference data
//!   loaded once at construction
//! - **Total mutations** - moves, comment appends, and deletes against ids
//!   that no longer resolve are benign races and silently do nothing
//! - **Derived board** - the per-column partition is recomputed on read,
//!   never stored
//!
//! ## Basic Usage
//!
//! ```rust
//! use tender_kanban::{task::AddTask, BoardContext, ColumnId};
//!
//! # fn main() -> tender_kanban::Result<()> {
//! let mut ctx = BoardContext::with_defaults();
//!
//! let task = AddTask::new("Draft the tender response")
//!     .with_description("First pass of the response document")
//!     .with_due_date("2024-06-01".parse().expect("valid date"))
//!     .execute(&mut ctx)?;
//!
//! // Drag the card to another column.
//! ctx.begin_drag(task.id.clone());
//! ctx.hover_column(ColumnId::from_string("in-progress"));
//! ctx.drop_on(ColumnId::from_string("in-progress"));
//!
//! assert_eq!(ctx.get(&task.id).expect("still there").status.as_str(), "in-progress");
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod catalog;
mod context;
pub mod defaults;
pub mod drag;
mod error;
pub mod search;
pub mod selection;
mod store;
pub mod types;

// Command modules
pub mod comment;
pub mod task;

pub use context::BoardContext;
pub use error::{BoardError, Result};
pub use store::TaskStore;

// Re-export commonly used types
pub use board::{BoardView, ColumnView};
pub use catalog::{AssigneeCatalog, ColumnCatalog};
pub use drag::{DragSession, DragState};
pub use selection::SelectionState;
pub use types::{
    Assignee, AssigneeId, Column, ColumnId, Comment, CommentId, Priority, Task, TaskId,
};
