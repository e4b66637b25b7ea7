//! Built-in catalog data and demo seed tasks.
//!
//! `default_columns()` and `default_assignees()` provide the reference data
//! a fresh board needs; `sample_tasks()` builds the demo backlog the app
//! boots with. All of it is plain constructor code - nothing here touches
//! board state.

use crate::catalog::AssigneeCatalog;
use crate::types::{Assignee, Column, ColumnId, Comment, Priority, Task};
use chrono::NaiveDate;

/// The built-in workflow columns, in board order.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To-Do List", "purple"),
        Column::new("in-progress", "In Progress", "blue"),
        Column::new("not-started", "Not Started", "orange"),
        Column::new("completed", "Completed", "green"),
    ]
}

/// The built-in assignee roster, in form order.
pub fn default_assignees() -> Vec<Assignee> {
    vec![
        Assignee::new("user1", "Alice Bennett", "https://i.pravatar.cc/150?u=user1"),
        Assignee::new("user2", "Marcus Cole", "https://i.pravatar.cc/150?u=user2"),
        Assignee::new("user3", "Priya Raman", "https://i.pravatar.cc/150?u=user3"),
        Assignee::new("user4", "Sofia Reyes", "https://i.pravatar.cc/150?u=user4"),
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("invalid built-in date")
}

/// Demo seed tasks, in most-recent-first order (ready for `list()`).
///
/// # Panics
///
/// Panics if `assignees` is missing one of the built-in roster ids; seed
/// data and roster ship together, so that would be a packaging bug.
pub fn sample_tasks(assignees: &AssigneeCatalog) -> Vec<Task> {
    let owner = |id: &str| {
        assignees
            .get(&id.into())
            .expect("seed task references an assignee outside the built-in roster")
            .clone()
    };

    let mut blueprint_review = Task::new(
        "Review structural blueprints",
        ColumnId::from_string("in-progress"),
        date(2024, 3, 18),
        owner("user2"),
    )
    .with_description("Cross-check the revised blueprints against the bid requirements.")
    .with_priority(Priority::High)
    .with_attachments_count(3);
    blueprint_review.push_comment(Comment::new(
        "Uploaded the annotated set from the site visit.",
        owner("user3"),
    ));

    vec![
        Task::new(
            "Draft the harbor tender response",
            ColumnId::from_string("todo"),
            date(2024, 4, 2),
            owner("user1"),
        )
        .with_description("First pass of the response document for the harbor expansion tender.")
        .with_priority(Priority::High)
        .with_attachments_count(1),
        blueprint_review,
        Task::new(
            "Collect subcontractor quotes",
            ColumnId::from_string("not-started"),
            date(2024, 3, 29),
            owner("user4"),
        )
        .with_description("Electrical and plumbing quotes are still outstanding."),
        Task::new(
            "Submit prequalification forms",
            ColumnId::from_string("completed"),
            date(2024, 3, 8),
            owner("user3"),
        )
        .with_description("Forms lodged with the procurement portal.")
        .with_priority(Priority::Low)
        .with_attachments_count(2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColumnCatalog;

    #[test]
    fn test_default_columns_cover_the_workflow() {
        let catalog = ColumnCatalog::new(default_columns());
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.first().id.as_str(), "todo");
        assert!(catalog.contains(&ColumnId::from_string("completed")));
    }

    #[test]
    fn test_sample_tasks_reference_known_catalog_entries() {
        let columns = ColumnCatalog::new(default_columns());
        let assignees = AssigneeCatalog::new(default_assignees());

        let tasks = sample_tasks(&assignees);
        assert!(!tasks.is_empty());
        for task in &tasks {
            assert!(columns.contains(&task.status));
            assert!(assignees.contains(&task.assignee.id));
            assert_eq!(task.comments_count, task.comments.len());
        }
    }
}
