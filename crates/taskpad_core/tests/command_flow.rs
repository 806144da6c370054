use std::fs;
use taskpad_core::{Session, TaskKind, TaskStore};
use tempfile::TempDir;

fn open_session(dir: &TempDir) -> Session {
    let (session, warning) = Session::open(TaskStore::new(dir.path().join("tasks.txt")));
    assert_eq!(warning, None, "fresh store must open without warnings");
    session
}

#[test]
fn adding_a_deadline_updates_list_message_and_file() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    let response = session.respond("deadline submit report /by 2/12/2024");

    assert!(!response.exit);
    assert_eq!(
        response.message,
        "Got it. I've added this task:\n  [D][ ] submit report (by: 2/12/2024)\nNow you have 1 task in the list."
    );
    assert_eq!(session.tasks().len(), 1);
    let task = session.tasks().get(1).unwrap();
    assert_eq!(task.description, "submit report");
    assert!(matches!(task.kind, TaskKind::Deadline { by } if by.to_string() == "2024-12-02"));

    let contents = fs::read_to_string(dir.path().join("tasks.txt")).unwrap();
    assert_eq!(contents, "D | 0 | submit report | 2/12/2024\n");
}

#[test]
fn done_out_of_range_changes_neither_list_nor_file() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);
    session.respond("todo read book");
    session.respond("todo water plants");
    let before = fs::read(dir.path().join("tasks.txt")).unwrap();

    let response = session.respond("done 5");

    assert_eq!(
        response.message,
        "task `5` does not exist; the list has 2 task(s)"
    );
    assert!(!response.exit);
    assert!(session.tasks().iter().all(|task| !task.is_done()));
    assert_eq!(fs::read(dir.path().join("tasks.txt")).unwrap(), before);
}

#[test]
fn done_marks_the_task_and_persists_the_flag() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);
    session.respond("todo read book");

    let response = session.respond("done 1");

    assert_eq!(
        response.message,
        "Nice! I've marked this task as done:\n  [T][X] read book"
    );
    assert!(session.tasks().get(1).unwrap().is_done());
    let contents = fs::read_to_string(dir.path().join("tasks.txt")).unwrap();
    assert_eq!(contents, "T | 1 | read book\n");
}

#[test]
fn negative_and_zero_indices_are_task_not_found() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);
    session.respond("todo read book");

    for input in ["done 0", "done -1", "delete 0"] {
        let response = session.respond(input);
        assert!(
            response.message.contains("does not exist"),
            "`{input}` replied: {}",
            response.message
        );
    }
    assert_eq!(session.tasks().len(), 1);
}

#[test]
fn delete_removes_the_task_and_renumbers_the_rest() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);
    session.respond("todo read book");
    session.respond("todo water plants");

    let response = session.respond("delete 1");

    assert_eq!(
        response.message,
        "Noted. I've removed this task:\n  [T][ ] read book\nNow you have 1 task in the list."
    );
    assert_eq!(session.tasks().len(), 1);
    assert_eq!(session.tasks().get(1).unwrap().description, "water plants");

    let listing = session.respond("list");
    assert_eq!(
        listing.message,
        "Here are the tasks in your list:\n1.[T][ ] water plants"
    );
}

#[test]
fn list_numbers_tasks_from_one_in_insertion_order() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);
    session.respond("todo read book");
    session.respond("event team meeting /at 3/12/2024");

    let response = session.respond("list");

    assert_eq!(
        response.message,
        "Here are the tasks in your list:\n1.[T][ ] read book\n2.[E][ ] team meeting (at: 3/12/2024)"
    );
}

#[test]
fn list_on_an_empty_session_says_so() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    assert_eq!(session.respond("list").message, "Your list is empty.");
}

#[test]
fn find_keeps_original_positions_and_skips_non_matches() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);
    session.respond("todo read book");
    session.respond("todo team meeting");

    let response = session.respond("find meeting");

    assert_eq!(
        response.message,
        "Here are the matching tasks in your list:\n2.[T][ ] team meeting"
    );
}

#[test]
fn find_matches_any_of_several_keywords() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);
    session.respond("todo read book");
    session.respond("todo team meeting");
    session.respond("todo buy milk");

    let response = session.respond("find book, milk");

    assert_eq!(
        response.message,
        "Here are the matching tasks in your list:\n1.[T][ ] read book\n3.[T][ ] buy milk"
    );
}

#[test]
fn find_without_matches_says_so() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);
    session.respond("todo read book");

    assert_eq!(
        session.respond("find laundry").message,
        "No matching tasks in your list."
    );
}

#[test]
fn clear_empties_the_list_and_truncates_the_file() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);
    session.respond("todo read book");
    session.respond("todo water plants");

    let response = session.respond("clear");

    assert_eq!(
        response.message,
        "Noted. I've cleared every task from your list."
    );
    assert!(session.tasks().is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("tasks.txt")).unwrap(),
        ""
    );
}

#[test]
fn bye_returns_the_goodbye_and_signals_exit() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    let response = session.respond("bye");

    assert!(response.exit);
    assert_eq!(response.message, "Goodbye! Please visit me again soon.");
}

#[test]
fn invalid_and_malformed_input_render_messages_without_exiting() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir);

    let unknown = session.respond("remind me later");
    assert_eq!(unknown.message, "I'm sorry, I don't understand that command.");
    assert!(!unknown.exit);

    let blank = session.respond("   ");
    assert_eq!(blank.message, "please input a command");

    let bad_date = session.respond("deadline x /by 2024-12-02");
    assert!(bad_date.message.contains("invalid date"));
    assert!(session.tasks().is_empty());
}

#[test]
fn session_reopens_with_previously_saved_tasks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.txt");

    let (mut session, _) = Session::open(TaskStore::new(&path));
    session.respond("todo read book");
    session.respond("done 1");

    let (reopened, warning) = Session::open(TaskStore::new(&path));
    assert_eq!(warning, None);
    assert_eq!(reopened.tasks().len(), 1);
    assert!(reopened.tasks().get(1).unwrap().is_done());
}

#[test]
fn corrupt_store_opens_empty_with_a_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.txt");
    fs::write(&path, "garbage line\n").unwrap();

    let (session, warning) = Session::open(TaskStore::new(&path));

    assert!(session.tasks().is_empty());
    let warning = warning.expect("corrupt file must surface a warning");
    assert!(warning.contains("starting with an empty list"));
}

#[test]
fn failed_save_keeps_the_in_memory_mutation() {
    let dir = TempDir::new().unwrap();
    // Parent directory never created, so every save fails.
    let store = TaskStore::new(dir.path().join("missing").join("tasks.txt"));
    let (mut session, _) = Session::open(store);

    let response = session.respond("todo read book");

    assert!(response.message.contains("could not access the task file"));
    assert_eq!(session.tasks().len(), 1);

    // The list stays authoritative for follow-up commands.
    let listing = session.respond("list");
    assert!(listing.message.contains("1.[T][ ] read book"));
}
