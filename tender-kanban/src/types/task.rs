//! Task types: Task, Comment, Priority

use super::board::Assignee;
use super::ids::{ColumnId, CommentId, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{}", label)
    }
}

/// A comment on a task - part of the discussion thread.
///
/// Created once, immutable thereafter; owned by exactly one task. The
/// thread's insertion order is chronological and significant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub author: Assignee,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment stamped with the current time.
    pub fn new(body: impl Into<String>, author: Assignee) -> Self {
        Self {
            id: CommentId::new(),
            author,
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

/// A task/card on the board.
///
/// `status` is a foreign key into the column catalog and is the sole
/// determinant of which column renders the task. `comments_count` is a
/// maintained cache of `comments.len()`; every comment append goes through
/// [`Task::push_comment`] so the two cannot diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: ColumnId,
    #[serde(default)]
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub assignee: Assignee,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub comments_count: usize,
    #[serde(default)]
    pub attachments_count: usize,
}

impl Task {
    /// Create a new task with an empty comment thread and zero counts.
    pub fn new(
        title: impl Into<String>,
        status: ColumnId,
        due_date: NaiveDate,
        assignee: Assignee,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            status,
            priority: Priority::default(),
            due_date,
            assignee,
            comments: Vec::new(),
            comments_count: 0,
            attachments_count: 0,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the attachment count (seed/demo data only; there is no
    /// attachment mutation operation).
    pub fn with_attachments_count(mut self, count: usize) -> Self {
        self.attachments_count = count;
        self
    }

    /// Append a comment to the thread, keeping the cached count in sync.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
        self.comments_count += 1;
    }

    /// Find a comment by ID
    pub fn find_comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }
}
