//! Ordered task collection with 1-based user indices.
//!
//! # Responsibility
//! - Own the session's tasks in insertion order.
//! - Resolve user-facing 1-based indices to list positions exactly once.
//!
//! # Invariants
//! - Insertion order is list order; positions shift down on removal.
//! - Index resolution never panics: out-of-range lookups return `None`.

use crate::model::task::Task;

/// Ordered, exclusively-owned collection of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-loaded tasks, keeping their order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Appends a task at the end of the list.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by its 1-based user index.
    pub fn get(&self, index: i64) -> Option<&Task> {
        self.position(index).map(|pos| &self.tasks[pos])
    }

    /// Mutable lookup by 1-based user index.
    pub fn get_mut(&mut self, index: i64) -> Option<&mut Task> {
        self.position(index).map(move |pos| &mut self.tasks[pos])
    }

    /// Removes and returns the task at a 1-based user index.
    pub fn remove(&mut self, index: i64) -> Option<Task> {
        self.position(index).map(|pos| self.tasks.remove(pos))
    }

    /// Drops every task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Tasks in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Converts a 1-based user index to a list position.
    ///
    /// Accepts the full signed range so a negative user argument resolves
    /// the same way as any other out-of-range index.
    fn position(&self, index: i64) -> Option<usize> {
        if index < 1 || index as usize > self.tasks.len() {
            return None;
        }
        Some(index as usize - 1)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
