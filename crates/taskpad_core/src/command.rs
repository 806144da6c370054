//! Typed commands and their execution protocol.
//!
//! # Responsibility
//! - Represent each user action as one command variant holding only its
//!   arguments.
//! - Apply a command to the task list and store, returning the
//!   confirmation text.
//!
//! # Invariants
//! - Each mutating variant updates the in-memory list first, then
//!   persists; a failed save leaves the in-memory mutation in place and
//!   is reported to the caller.
//! - A failed index lookup mutates nothing and writes nothing.
//! - `execute` always produces a non-empty message.

use crate::model::task::Task;
use crate::model::task_list::TaskList;
use crate::storage::{StorageError, TaskStore};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult = Result<String, CommandError>;

/// Execution failure for a well-formed command.
#[derive(Debug)]
pub enum CommandError {
    TaskNotFound { index: i64, len: usize },
    Storage(StorageError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound { index, len } => write!(
                f,
                "task `{index}` does not exist; the list has {len} task(s)"
            ),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TaskNotFound { .. } => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for CommandError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// One parsed user action, executed exactly once and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append an already-constructed task.
    Add(Task),
    /// Mark the task at a 1-based index done.
    Done(i64),
    /// Remove the task at a 1-based index.
    Delete(i64),
    /// Show every task with its 1-based number.
    List,
    /// Show tasks whose description contains any of the keywords.
    Find(Vec<String>),
    /// Drop every task and truncate the file.
    Clear,
    /// End the session.
    Exit,
    /// Unrecognized keyword; reports the failure as its message.
    Invalid,
}

impl Command {
    /// Applies this command to the list and store.
    ///
    /// # Errors
    /// - `CommandError::TaskNotFound` when a `done`/`delete` index is out
    ///   of range.
    /// - `CommandError::Storage` when persisting the mutation fails.
    pub fn execute(self, tasks: &mut TaskList, store: &TaskStore) -> CommandResult {
        debug!("event=command_executed kind={}", self.name());
        match self {
            Self::Add(task) => {
                let rendered = task.to_string();
                tasks.add(task);
                store.save(tasks)?;
                Ok(format!(
                    "Got it. I've added this task:\n  {rendered}\nNow you have {} in the list.",
                    count_tasks(tasks.len())
                ))
            }
            Self::Done(index) => {
                let rendered = {
                    let len = tasks.len();
                    let task = tasks
                        .get_mut(index)
                        .ok_or(CommandError::TaskNotFound { index, len })?;
                    task.set_done(true);
                    task.to_string()
                };
                store.save(tasks)?;
                Ok(format!("Nice! I've marked this task as done:\n  {rendered}"))
            }
            Self::Delete(index) => {
                let len = tasks.len();
                let task = tasks
                    .remove(index)
                    .ok_or(CommandError::TaskNotFound { index, len })?;
                store.save(tasks)?;
                Ok(format!(
                    "Noted. I've removed this task:\n  {task}\nNow you have {} in the list.",
                    count_tasks(tasks.len())
                ))
            }
            Self::List => {
                if tasks.is_empty() {
                    return Ok("Your list is empty.".to_string());
                }
                let mut message = String::from("Here are the tasks in your list:");
                for (position, task) in tasks.iter().enumerate() {
                    message.push_str(&format!("\n{}.{task}", position + 1));
                }
                Ok(message)
            }
            Self::Find(keywords) => {
                let mut message = String::from("Here are the matching tasks in your list:");
                let mut matched = false;
                for (position, task) in tasks.iter().enumerate() {
                    let hit = keywords
                        .iter()
                        .any(|keyword| task.description.contains(keyword.as_str()));
                    if hit {
                        matched = true;
                        message.push_str(&format!("\n{}.{task}", position + 1));
                    }
                }
                if !matched {
                    return Ok("No matching tasks in your list.".to_string());
                }
                Ok(message)
            }
            Self::Clear => {
                tasks.clear();
                store.save(tasks)?;
                Ok("Noted. I've cleared every task from your list.".to_string())
            }
            Self::Exit => Ok("Goodbye! Please visit me again soon.".to_string()),
            Self::Invalid => Ok("I'm sorry, I don't understand that command.".to_string()),
        }
    }

    /// True only for the exit variant; the caller stops its loop on it.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Done(_) => "done",
            Self::Delete(_) => "delete",
            Self::List => "list",
            Self::Find(_) => "find",
            Self::Clear => "clear",
            Self::Exit => "exit",
            Self::Invalid => "invalid",
        }
    }
}

fn count_tasks(len: usize) -> String {
    if len == 1 {
        "1 task".to_string()
    } else {
        format!("{len} tasks")
    }
}
