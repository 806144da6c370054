//! Interactive console front-end.
//!
//! # Responsibility
//! - Read one line at a time from stdin and print the session's replies.
//! - Resolve the data file and log directory under `./data/`.

use log::info;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use taskpad_core::{core_version, default_log_level, init_logging, Session, TaskStore};

const DATA_FILE: &str = "data/taskpad.txt";
const LOG_DIR: &str = "data/logs";
const DIVIDER: &str = "____________________________________________________________";

fn main() {
    if let Err(err) = init_cli_logging() {
        eprintln!("warning: file logging disabled: {err}");
    }
    info!("event=cli_start version={}", core_version());

    if let Err(err) = fs::create_dir_all(data_dir()) {
        eprintln!("warning: could not create `{}`: {err}", data_dir().display());
    }

    let (mut session, warning) = Session::open(TaskStore::new(DATA_FILE));

    println!("{DIVIDER}");
    if let Some(warning) = warning {
        println!("{warning}");
    }
    println!("{}", Session::greeting());
    println!("{DIVIDER}");

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        let response = session.respond(&line);
        println!("{DIVIDER}");
        println!("{}", response.message);
        println!("{DIVIDER}");
        if response.exit {
            break;
        }
    }
}

fn data_dir() -> &'static Path {
    Path::new(DATA_FILE)
        .parent()
        .unwrap_or_else(|| Path::new("."))
}

fn init_cli_logging() -> Result<(), String> {
    let log_dir = std::env::current_dir()
        .map_err(|err| format!("cannot resolve working directory: {err}"))?
        .join(LOG_DIR);
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| "log directory path is not valid UTF-8".to_string())?;
    init_logging(default_log_level(), log_dir)
}
