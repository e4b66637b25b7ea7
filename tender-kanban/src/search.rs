//! Free-text search over the task collection.
//!
//! A pure projection: no state, no side effects, recomputed on every call.
//! The collection is small, so a fresh scan beats maintaining an index.

use crate::types::Task;

/// Whether a task matches the query: case-insensitive substring over the
/// title or the description.
pub fn matches(task: &Task, query: &str) -> bool {
    let needle = query.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
}

/// Filter tasks by a free-text query, preserving order.
///
/// An empty query is the identity: every task passes through unchanged.
pub fn filter<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    if query.is_empty() {
        return tasks.iter().collect();
    }
    tasks.iter().filter(|t| matches(t, query)).collect()
}
