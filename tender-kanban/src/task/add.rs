//! AddTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::{AssigneeId, ColumnId, Priority, Task};
use chrono::NaiveDate;

/// Add a new task to the board.
///
/// Title and due date are required; status, priority, and assignee default
/// to the first catalog column, `Medium`, and the first roster member. The
/// new task is inserted at the head of the collection, so the flat list
/// reads most-recent-first.
#[derive(Debug)]
pub struct AddTask {
    /// The task title (required)
    pub title: String,
    /// Detailed task description
    pub description: Option<String>,
    /// Target column; defaults to the first catalog column
    pub status: Option<ColumnId>,
    /// Priority; defaults to Medium
    pub priority: Option<Priority>,
    /// Due date (required)
    pub due_date: Option<NaiveDate>,
    /// Owner; defaults to the first roster member
    pub assignee: Option<AssigneeId>,
}

impl AddTask {
    /// Create a new AddTask command with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            due_date: None,
            assignee: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the target column
    pub fn with_status(mut self, status: impl Into<ColumnId>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<AssigneeId>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Validate, build, and insert the task. On a validation failure the
    /// store is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the status or assignee names an id outside the static
    /// catalogs - those inputs come from catalog-driven pickers, so an
    /// unknown id is a caller bug, not a runtime condition.
    pub fn execute(&self, ctx: &mut BoardContext) -> Result<Task> {
        if self.title.trim().is_empty() {
            return Err(BoardError::missing_field("title"));
        }
        let due_date = self
            .due_date
            .ok_or_else(|| BoardError::missing_field("due_date"))?;

        let status = match &self.status {
            Some(status) => {
                assert!(
                    ctx.columns().contains(status),
                    "status must name a catalog column: {status}"
                );
                status.clone()
            }
            None => ctx.columns().first().id.clone(),
        };

        let assignee = match &self.assignee {
            Some(id) => ctx
                .assignees()
                .get(id)
                .unwrap_or_else(|| panic!("assignee must be in the catalog: {id}"))
                .clone(),
            None => ctx.assignees().first().clone(),
        };

        let mut task = Task::new(self.title.clone(), status, due_date, assignee);
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }

        tracing::debug!(task = %task.id, title = %task.title, status = %task.status, "task added");
        ctx.store_mut().insert_front(task.clone());
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn setup() -> BoardContext {
        BoardContext::with_defaults()
    }

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_add_task() {
        let mut ctx = setup();

        let task = AddTask::new("Draft response")
            .with_description("First pass")
            .with_due_date(due())
            .execute(&mut ctx)
            .unwrap();

        assert_eq!(task.title, "Draft response");
        assert_eq!(task.description, "First pass");
        assert_eq!(task.status.as_str(), "todo");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.comments_count, 0);
        assert!(task.comments.is_empty());
    }

    #[test]
    fn test_new_task_goes_to_the_head() {
        let mut ctx = setup();

        AddTask::new("First").with_due_date(due()).execute(&mut ctx).unwrap();
        AddTask::new("Second").with_due_date(due()).execute(&mut ctx).unwrap();

        let titles: Vec<&str> = ctx.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Second", "First"]);
    }

    #[test]
    fn test_blank_title_is_rejected_without_mutation() {
        let mut ctx = setup();

        let result = AddTask::new("   ").with_due_date(due()).execute(&mut ctx);

        assert!(matches!(
            result,
            Err(BoardError::MissingField { ref field }) if field == "title"
        ));
        assert!(ctx.tasks().is_empty());
    }

    #[test]
    fn test_missing_due_date_is_rejected() {
        let mut ctx = setup();

        let result = AddTask::new("No date").execute(&mut ctx);

        assert!(matches!(
            result,
            Err(BoardError::MissingField { ref field }) if field == "due_date"
        ));
        assert!(ctx.tasks().is_empty());
    }

    #[test]
    fn test_explicit_fields_are_honored() {
        let mut ctx = setup();

        let task = AddTask::new("Urgent review")
            .with_status("in-progress")
            .with_priority(Priority::High)
            .with_assignee("user3")
            .with_due_date(due())
            .execute(&mut ctx)
            .unwrap();

        assert_eq!(task.status.as_str(), "in-progress");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.assignee.id.as_str(), "user3");
    }

    #[test]
    #[should_panic(expected = "status must name a catalog column")]
    fn test_unknown_status_fails_fast() {
        let mut ctx = setup();
        let _ = AddTask::new("Stray")
            .with_status("archived")
            .with_due_date(due())
            .execute(&mut ctx);
    }
}
