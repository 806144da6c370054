//! One interactive session over a task list and its backing store.
//!
//! # Responsibility
//! - Load persisted tasks at open, falling back to an empty list.
//! - Turn each input line into one executed command and one reply.
//!
//! # Invariants
//! - `respond` never fails: parse and execution errors are rendered into
//!   the reply text and the session continues.
//! - The in-memory list stays authoritative for the rest of the session
//!   even when a save fails.

use crate::model::task_list::TaskList;
use crate::parse::parse;
use crate::storage::{StorageError, TaskStore};
use log::{info, warn};
use std::io::ErrorKind;

/// Reply to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub message: String,
    /// True when the caller should stop reading input.
    pub exit: bool,
}

/// Owns the task list and store for one interactive run.
pub struct Session {
    tasks: TaskList,
    store: TaskStore,
}

impl Session {
    /// Opens a session over the given store.
    ///
    /// A store whose file does not exist yet yields an empty list. Any
    /// other load failure also yields an empty list, plus a warning text
    /// for the caller to show before the first prompt.
    pub fn open(store: TaskStore) -> (Self, Option<String>) {
        let (tasks, warning) = match store.load() {
            Ok(tasks) => {
                info!("event=session_open status=ok task_count={}", tasks.len());
                (TaskList::from_tasks(tasks), None)
            }
            Err(StorageError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                info!("event=session_open status=ok task_count=0 file=absent");
                (TaskList::new(), None)
            }
            Err(err) => {
                warn!("event=session_open status=load_failed error={err}");
                let warning =
                    format!("We couldn't load your saved tasks ({err}); starting with an empty list.");
                (TaskList::new(), Some(warning))
            }
        };
        (Self { tasks, store }, warning)
    }

    /// Greeting shown by the front-end before the first prompt.
    pub fn greeting() -> &'static str {
        "Hello! I'm Taskpad, your personal task keeper.\nWhat can I do for you?"
    }

    /// Parses and executes one input line, rendering any failure into the
    /// reply text.
    pub fn respond(&mut self, input: &str) -> Response {
        let command = match parse(input) {
            Ok(command) => command,
            Err(err) => {
                return Response {
                    message: err.to_string(),
                    exit: false,
                }
            }
        };

        let exit = command.is_exit();
        match command.execute(&mut self.tasks, &self.store) {
            Ok(message) => Response { message, exit },
            Err(err) => {
                warn!("event=command_failed error={err}");
                Response {
                    message: err.to_string(),
                    exit: false,
                }
            }
        }
    }

    /// Read-only view of the current tasks.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }
}
