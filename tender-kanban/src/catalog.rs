//! Static reference catalogs: columns and assignees.
//!
//! Catalogs are loaded once at context construction and are read-only
//! thereafter. They preserve their load order, which is the display order.

use crate::types::{Assignee, AssigneeId, Column, ColumnId};

/// The ordered set of workflow columns.
#[derive(Debug, Clone)]
pub struct ColumnCatalog {
    columns: Vec<Column>,
}

impl ColumnCatalog {
    /// Build a catalog from ordered column definitions.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is empty - a board without columns is a
    /// programming invariant violation, not a runtime condition.
    pub fn new(columns: Vec<Column>) -> Self {
        assert!(!columns.is_empty(), "column catalog must not be empty");
        Self { columns }
    }

    /// Look up a column by id.
    pub fn get(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Whether the catalog contains the given id.
    pub fn contains(&self, id: &ColumnId) -> bool {
        self.get(id).is_some()
    }

    /// The first column in board order - the default status for new tasks.
    pub fn first(&self) -> &Column {
        &self.columns[0]
    }

    /// Columns in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The known assignees, in form/display order.
#[derive(Debug, Clone)]
pub struct AssigneeCatalog {
    assignees: Vec<Assignee>,
}

impl AssigneeCatalog {
    /// Build a catalog from ordered assignee records.
    ///
    /// # Panics
    ///
    /// Panics if `assignees` is empty - every task carries an assignee, so
    /// an empty roster cannot satisfy the data model.
    pub fn new(assignees: Vec<Assignee>) -> Self {
        assert!(!assignees.is_empty(), "assignee catalog must not be empty");
        Self { assignees }
    }

    /// Look up an assignee by id.
    pub fn get(&self, id: &AssigneeId) -> Option<&Assignee> {
        self.assignees.iter().find(|a| &a.id == id)
    }

    /// Whether the catalog contains the given id.
    pub fn contains(&self, id: &AssigneeId) -> bool {
        self.get(id).is_some()
    }

    /// The first assignee - the default owner for new tasks.
    pub fn first(&self) -> &Assignee {
        &self.assignees[0]
    }

    /// Assignees in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Assignee> {
        self.assignees.iter()
    }

    pub fn len(&self) -> usize {
        self.assignees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignees.is_empty()
    }
}
