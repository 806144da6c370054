//! Durable task persistence in a line-oriented text file.
//!
//! # Responsibility
//! - Rewrite the whole task file on every save, one task per line.
//! - Decode persisted lines back into tasks, rejecting corrupt state.
//!
//! # Invariants
//! - Field order is fixed: marker, done flag, description, optional date.
//! - Dates are persisted in the canonical `d/M/yyyy` rendering, so
//!   save/load/save round-trips byte-identically.
//! - A malformed line aborts the whole load; it is never silently skipped.
//!
//! Known limitation: the ` | ` delimiter is not escaped, so a description
//! containing it corrupts its line.

use crate::model::task::{self, Task, DATE_FORMAT};
use crate::model::task_list::TaskList;
use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

const DELIMITER: &str = " | ";

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence failure for the task file.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Corrupt { line: usize, message: String },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not access the task file: {err}"),
            Self::Corrupt { line, message } => {
                write!(f, "corrupt task file at line {line}: {message}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt { .. } => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Handle to the flat text file holding the persisted task list.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Creates a store for the given file path. The file itself is only
    /// touched by `save` and `load`; the parent directory must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the file from scratch with the current list contents.
    ///
    /// An empty list truncates the file to zero lines.
    ///
    /// # Errors
    /// Returns `StorageError::Io` when the file cannot be written.
    pub fn save(&self, tasks: &TaskList) -> StorageResult<()> {
        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&encode_task(task));
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        debug!(
            "event=tasks_saved count={} path={}",
            tasks.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Reads every persisted task back, in file order.
    ///
    /// # Errors
    /// - `StorageError::Io` when the file is absent or unreadable; startup
    ///   callers decide whether an absent file means "empty list".
    /// - `StorageError::Corrupt` on the first malformed line; nothing is
    ///   returned from a corrupt file.
    pub fn load(&self) -> StorageResult<Vec<Task>> {
        let contents = fs::read_to_string(&self.path)?;
        let tasks = contents
            .lines()
            .enumerate()
            .map(|(number, line)| {
                decode_line(line).map_err(|message| StorageError::Corrupt {
                    line: number + 1,
                    message,
                })
            })
            .collect::<StorageResult<Vec<Task>>>()?;
        debug!(
            "event=tasks_loaded count={} path={}",
            tasks.len(),
            self.path.display()
        );
        Ok(tasks)
    }
}

fn encode_task(task: &Task) -> String {
    let done = if task.done { "1" } else { "0" };
    let mut line = format!("{}{DELIMITER}{done}{DELIMITER}{}", task.kind.marker(), task.description);
    if let Some(date) = task.date() {
        line.push_str(DELIMITER);
        line.push_str(&date.format(DATE_FORMAT).to_string());
    }
    line
}

fn decode_line(line: &str) -> Result<Task, String> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let mut task = match fields.as_slice() {
        ["T", _, description] => Task::todo(*description),
        ["D", _, description, date] => Task::deadline(*description, decode_date(date)?),
        ["E", _, description, date] => Task::event(*description, decode_date(date)?),
        [marker @ ("T" | "D" | "E"), ..] => {
            return Err(format!(
                "wrong field count {} for marker `{marker}`",
                fields.len()
            ));
        }
        [marker, ..] => return Err(format!("unknown task marker `{marker}`")),
        [] => return Err("empty line".to_string()),
    };
    task.set_done(decode_done_flag(fields[1])?);
    Ok(task)
}

fn decode_done_flag(field: &str) -> Result<bool, String> {
    match field {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(format!("invalid done flag `{other}`")),
    }
}

fn decode_date(field: &str) -> Result<NaiveDate, String> {
    task::parse_date(field).ok_or_else(|| format!("invalid date field `{field}`"))
}
