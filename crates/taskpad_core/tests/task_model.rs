use chrono::NaiveDate;
use taskpad_core::{Task, TaskKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
}

#[test]
fn todo_constructor_sets_defaults() {
    let task = Task::todo("read book");

    assert_eq!(task.kind, TaskKind::Todo);
    assert_eq!(task.description, "read book");
    assert!(!task.is_done());
    assert_eq!(task.date(), None);
}

#[test]
fn dated_kinds_expose_their_date() {
    let deadline = Task::deadline("submit report", date(2024, 12, 2));
    let event = Task::event("team meeting", date(2024, 12, 3));

    assert_eq!(deadline.date(), Some(date(2024, 12, 2)));
    assert_eq!(event.date(), Some(date(2024, 12, 3)));
    assert_eq!(deadline.kind.marker(), 'D');
    assert_eq!(event.kind.marker(), 'E');
}

#[test]
fn set_done_is_the_only_mutation() {
    let mut task = Task::todo("read book");

    task.set_done(true);
    assert!(task.is_done());
    assert_eq!(task.description, "read book");
    assert_eq!(task.kind, TaskKind::Todo);

    task.set_done(false);
    assert!(!task.is_done());
}

#[test]
fn display_renders_marker_done_flag_and_date() {
    let mut todo = Task::todo("read book");
    assert_eq!(todo.to_string(), "[T][ ] read book");

    todo.set_done(true);
    assert_eq!(todo.to_string(), "[T][X] read book");

    let deadline = Task::deadline("submit report", date(2024, 12, 2));
    assert_eq!(deadline.to_string(), "[D][ ] submit report (by: 2/12/2024)");

    let event = Task::event("team meeting", date(2024, 12, 3));
    assert_eq!(event.to_string(), "[E][ ] team meeting (at: 3/12/2024)");
}

#[test]
fn display_does_not_zero_pad_dates() {
    let deadline = Task::deadline("new year prep", date(2025, 1, 5));
    assert_eq!(deadline.to_string(), "[D][ ] new year prep (by: 5/1/2025)");
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::deadline("submit report", date(2024, 12, 2));
    task.set_done(true);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["type"], "deadline");
    assert_eq!(json["by"], "2024-12-02");
    assert_eq!(json["description"], "submit report");
    assert_eq!(json["done"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn todo_serialization_carries_no_date_field() {
    let json = serde_json::to_value(Task::todo("read book")).unwrap();
    assert_eq!(json["type"], "todo");
    assert!(json.get("by").is_none());
    assert!(json.get("at").is_none());
}
