//! Board-level reference types: Column, Assignee

use super::ids::{AssigneeId, ColumnId};
use serde::{Deserialize, Serialize};

/// A column defines a workflow stage.
///
/// Columns are static catalog entries; the set of valid task statuses is
/// exactly the set of column ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Display color name used by the presentation layer.
    pub color: String,
}

impl Column {
    /// Create a new column catalog entry.
    pub fn new(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
        }
    }
}

/// An assignee is a person who can own tasks and author comments.
///
/// Immutable reference data; looked up by id, never mutated by the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignee {
    pub id: AssigneeId,
    pub name: String,
    pub avatar_url: String,
}

impl Assignee {
    /// Create a new assignee catalog entry.
    pub fn new(
        id: impl Into<AssigneeId>,
        name: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_creation() {
        let col = Column::new("todo", "To-Do List", "purple");
        assert_eq!(col.id.as_str(), "todo");
        assert_eq!(col.title, "To-Do List");
        assert_eq!(col.color, "purple");
    }

    #[test]
    fn test_assignee_serialization() {
        let user = Assignee::new("user1", "Alice Bennett", "https://i.pravatar.cc/150?u=user1");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "user1");
        assert_eq!(json["name"], "Alice Bennett");
    }
}
