//! Command grammar: one input line to one typed command.
//!
//! # Responsibility
//! - Split a raw line into a keyword and a remainder, resolve the keyword
//!   against the fixed command table, and extract typed arguments.
//! - Report every malformed input as a typed `ParseError`.
//!
//! # Invariants
//! - Keyword matching is ASCII case-insensitive; everything after the
//!   keyword is matched literally, with no trimming beyond the one split.
//! - A successfully parsed add command always carries a non-blank
//!   description.
//! - An absent `/by` / `/at` separator is an explicit missing-date error,
//!   never an out-of-bounds access.

use crate::command::Command;
use crate::model::task::{self, Task};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Separator between a deadline description and its date.
pub const BY_SPECIFIER: &str = " /by ";
/// Separator between an event description and its date.
pub const AT_SPECIFIER: &str = " /at ";
/// Separator between find keywords.
pub const FIND_SPECIFIER: &str = ", ";

pub type ParseResult<T> = Result<T, ParseError>;

/// Typed failure for input that does not fit the grammar.
///
/// Unrecognized keywords are not an error: they resolve to
/// `Command::Invalid`, whose execution reports the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    EmptyInput,
    MissingDescription,
    MissingDate { specifier: &'static str },
    InvalidDate { input: String },
    InvalidTaskIndex { input: String },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "please input a command"),
            Self::MissingDescription => write!(f, "missing task description"),
            Self::MissingDate { specifier } => write!(
                f,
                "missing date: expected `{}` followed by a date",
                specifier.trim()
            ),
            Self::InvalidDate { input } => write!(
                f,
                "invalid date `{input}`; expected d/M/yyyy, e.g. `2/12/2024`"
            ),
            Self::InvalidTaskIndex { input } => {
                write!(f, "invalid task index `{input}`; expected a number")
            }
        }
    }
}

impl Error for ParseError {}

#[derive(Debug, Clone, Copy)]
enum Keyword {
    List,
    Todo,
    Deadline,
    Event,
    Done,
    Delete,
    Find,
    Clear,
    Bye,
}

/// Static keyword table; resolution is case-insensitive.
const KEYWORDS: &[(&str, Keyword)] = &[
    ("list", Keyword::List),
    ("todo", Keyword::Todo),
    ("deadline", Keyword::Deadline),
    ("event", Keyword::Event),
    ("done", Keyword::Done),
    ("delete", Keyword::Delete),
    ("find", Keyword::Find),
    ("clear", Keyword::Clear),
    ("bye", Keyword::Bye),
];

/// Parses one raw input line into a command.
///
/// # Errors
/// - `EmptyInput` for blank lines.
/// - `MissingDescription` / `MissingDate` / `InvalidDate` /
///   `InvalidTaskIndex` when a recognized keyword has malformed arguments.
pub fn parse(input: &str) -> ParseResult<Command> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (keyword, remainder) = match input.split_once(' ') {
        Some((keyword, remainder)) => (keyword, remainder),
        None => (input, ""),
    };

    let Some(keyword) = resolve_keyword(keyword) else {
        return Ok(Command::Invalid);
    };

    match keyword {
        Keyword::List => Ok(Command::List),
        Keyword::Todo => {
            require_description(remainder)?;
            Ok(Command::Add(Task::todo(remainder)))
        }
        Keyword::Deadline => {
            let (description, by) = split_dated(remainder, BY_SPECIFIER)?;
            Ok(Command::Add(Task::deadline(description, by)))
        }
        Keyword::Event => {
            let (description, at) = split_dated(remainder, AT_SPECIFIER)?;
            Ok(Command::Add(Task::event(description, at)))
        }
        Keyword::Done => Ok(Command::Done(parse_index(remainder)?)),
        Keyword::Delete => Ok(Command::Delete(parse_index(remainder)?)),
        Keyword::Find => Ok(Command::Find(parse_keywords(remainder)?)),
        Keyword::Clear => Ok(Command::Clear),
        Keyword::Bye => Ok(Command::Exit),
    }
}

fn resolve_keyword(word: &str) -> Option<Keyword> {
    KEYWORDS
        .iter()
        .find(|(name, _)| word.eq_ignore_ascii_case(name))
        .map(|(_, keyword)| *keyword)
}

fn require_description(remainder: &str) -> ParseResult<()> {
    if remainder.trim().is_empty() {
        return Err(ParseError::MissingDescription);
    }
    Ok(())
}

/// Splits `description<specifier>date` and parses the date field.
fn split_dated<'a>(
    remainder: &'a str,
    specifier: &'static str,
) -> ParseResult<(&'a str, NaiveDate)> {
    require_description(remainder)?;
    let (description, date_text) = remainder
        .split_once(specifier)
        .ok_or(ParseError::MissingDate { specifier })?;
    require_description(description)?;
    Ok((description, parse_date(date_text)?))
}

fn parse_date(text: &str) -> ParseResult<NaiveDate> {
    task::parse_date(text).ok_or_else(|| ParseError::InvalidDate {
        input: text.to_string(),
    })
}

/// Task indices are taken as full signed integers; range checking happens
/// at execution against the current list length.
fn parse_index(text: &str) -> ParseResult<i64> {
    text.parse::<i64>().map_err(|_| ParseError::InvalidTaskIndex {
        input: text.to_string(),
    })
}

fn parse_keywords(remainder: &str) -> ParseResult<Vec<String>> {
    require_description(remainder)?;
    let keywords: Vec<String> = remainder
        .split(FIND_SPECIFIER)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect();
    if keywords.is_empty() {
        return Err(ParseError::MissingDescription);
    }
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::{parse_date, parse_index, resolve_keyword, ParseError};

    #[test]
    fn keyword_resolution_is_case_insensitive() {
        assert!(resolve_keyword("LIST").is_some());
        assert!(resolve_keyword("Deadline").is_some());
        assert!(resolve_keyword("byebye").is_none());
    }

    #[test]
    fn parse_date_reports_the_offending_input() {
        assert_eq!(parse_date("2/12/2024").unwrap().to_string(), "2024-12-02");
        assert_eq!(
            parse_date("2024-12-02"),
            Err(ParseError::InvalidDate {
                input: "2024-12-02".to_string()
            })
        );
    }

    #[test]
    fn parse_index_rejects_non_numeric_text() {
        assert_eq!(parse_index("5"), Ok(5));
        assert_eq!(parse_index("-1"), Ok(-1));
        assert!(matches!(
            parse_index("five"),
            Err(ParseError::InvalidTaskIndex { .. })
        ));
    }
}
