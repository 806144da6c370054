//! Task record and display rendering.
//!
//! # Responsibility
//! - Define `Task` and `TaskKind` (todo / deadline / event).
//! - Render the canonical on-screen form shared with listings.
//!
//! # Invariants
//! - `kind` is immutable once the task is constructed.
//! - Deadline and event tasks always carry a date; todo never does.
//! - Dates render in the same `d/M/yyyy` form everywhere (screen and disk).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Canonical rendering for task dates, matching the `d/M/yyyy` input form
/// without zero padding (`2/12/2024`).
pub const DATE_FORMAT: &str = "%-d/%-m/%Y";

/// Parses the canonical `d/M/yyyy` date form.
///
/// The year must be exactly four digits; `%Y` on its own also accepts
/// shorter years, which the format forbids.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let (_, year) = text.rsplit_once('/')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Kind tag plus the date payload that only dated kinds carry.
///
/// Serialized with the kind as a `type` field so GUI-side consumers get
/// `{"type": "deadline", "by": "2024-12-02", ...}` shaped records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    /// Plain to-do with no date.
    Todo,
    /// Due by a calendar date.
    Deadline { by: NaiveDate },
    /// Happening at a calendar date.
    Event { at: NaiveDate },
}

impl TaskKind {
    /// Single-letter marker used in listings and in the persisted format.
    pub fn marker(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// One entry in the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(flatten)]
    pub kind: TaskKind,
    pub description: String,
    pub done: bool,
}

impl Task {
    /// Creates an unfinished to-do task.
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(TaskKind::Todo, description)
    }

    /// Creates an unfinished deadline task due `by` the given date.
    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        Self::new(TaskKind::Deadline { by }, description)
    }

    /// Creates an unfinished event task happening `at` the given date.
    pub fn event(description: impl Into<String>, at: NaiveDate) -> Self {
        Self::new(TaskKind::Event { at }, description)
    }

    fn new(kind: TaskKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            done: false,
        }
    }

    /// Marks the task done or not done.
    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The task's date, if its kind carries one.
    pub fn date(&self) -> Option<NaiveDate> {
        match self.kind {
            TaskKind::Todo => None,
            TaskKind::Deadline { by } => Some(by),
            TaskKind::Event { at } => Some(at),
        }
    }
}

impl Display for Task {
    /// Renders `[T][X] read book` / `[D][ ] submit report (by: 2/12/2024)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let done = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.marker(), done, self.description)?;
        match self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by.format(DATE_FORMAT)),
            TaskKind::Event { at } => write!(f, " (at: {})", at.format(DATE_FORMAT)),
        }
    }
}
