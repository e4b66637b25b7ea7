//! Derived board projection: tasks partitioned by column.
//!
//! The board is never stored - it is recomputed on read from the column
//! catalog and the task collection. A task whose status matches no catalog
//! column (possible via the permissive move operation) appears in no
//! bucket; it remains reachable through the flat task list.

use crate::catalog::ColumnCatalog;
use crate::search;
use crate::types::{Column, Task};
use serde::Serialize;

/// One column and its visible tasks, in collection order.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnView {
    pub column: Column,
    pub tasks: Vec<Task>,
}

impl ColumnView {
    /// Number of visible tasks in this column.
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

/// The full board: one bucket per catalog column, in board order.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    /// Partition `tasks` (optionally narrowed by `query`) across the
    /// catalog columns.
    pub fn build(catalog: &ColumnCatalog, tasks: &[Task], query: &str) -> Self {
        let visible = search::filter(tasks, query);

        let columns = catalog
            .iter()
            .map(|column| ColumnView {
                column: column.clone(),
                tasks: visible
                    .iter()
                    .filter(|t| t.status == column.id)
                    .map(|t| (*t).clone())
                    .collect(),
            })
            .collect();

        Self { columns }
    }

    /// Total number of visible tasks across all columns.
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(ColumnView::count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Assignee, ColumnId};
    use chrono::NaiveDate;

    fn catalog() -> ColumnCatalog {
        ColumnCatalog::new(vec![
            Column::new("todo", "To-Do List", "purple"),
            Column::new("done", "Completed", "green"),
        ])
    }

    fn task(title: &str, status: &str) -> Task {
        Task::new(
            title,
            ColumnId::from_string(status),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Assignee::new("user1", "Alice Bennett", "https://i.pravatar.cc/150?u=user1"),
        )
    }

    #[test]
    fn test_partition_by_status() {
        let tasks = vec![task("a", "todo"), task("b", "done"), task("c", "todo")];
        let view = BoardView::build(&catalog(), &tasks, "");

        assert_eq!(view.columns.len(), 2);
        assert_eq!(view.columns[0].count(), 2);
        assert_eq!(view.columns[1].count(), 1);
        assert_eq!(view.task_count(), 3);
    }

    #[test]
    fn test_query_narrows_buckets() {
        let tasks = vec![task("alpha", "todo"), task("beta", "todo")];
        let view = BoardView::build(&catalog(), &tasks, "alpha");

        assert_eq!(view.columns[0].count(), 1);
        assert_eq!(view.columns[0].tasks[0].title, "alpha");
    }

    #[test]
    fn test_unknown_status_lands_in_no_bucket() {
        let tasks = vec![task("stray", "archived")];
        let view = BoardView::build(&catalog(), &tasks, "");

        assert_eq!(view.task_count(), 0);
    }

    #[test]
    fn test_empty_columns_still_present() {
        let view = BoardView::build(&catalog(), &[], "");
        assert_eq!(view.columns.len(), 2);
        assert!(view.columns.iter().all(|c| c.tasks.is_empty()));
    }
}
