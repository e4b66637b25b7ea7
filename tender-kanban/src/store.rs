//! In-memory task storage.
//!
//! The store is the authoritative, mutable collection of tasks. It keeps
//! most-recent-first order: new tasks go to the head. The store provides
//! access primitives only; the mutation commands do the work.

use crate::types::{Task, TaskId};

/// The authoritative collection of tasks.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a task at the head of the collection.
    pub fn insert_front(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Look up a task by id.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Look up a task by id (mutable).
    pub fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    /// Whether a task with the given id exists.
    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Remove a task by id. Idempotent: returns `false` when the id was
    /// already absent, `true` when a task was removed.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        self.tasks.len() != before
    }

    /// The full ordered collection.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// An owned snapshot of the full ordered collection.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
