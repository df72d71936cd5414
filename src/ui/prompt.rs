//! Blocking line-oriented prompts for the interactive session.
//!
//! Every prompt reads one line from stdin. EOF returns `None` so the menu
//! loops terminate cleanly when input runs out (piped input, Ctrl-D).

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::models::Task;
use crate::ui::messages::warning;
use crate::utils::date::parse_date;

/// Print `prompt`, read one line, return it trimmed. `None` on EOF.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Ask a yes/no confirmation. Only an explicit `y`/`yes` confirms.
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    match read_line("Confirm [y/N]: ") {
        Some(answer) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
        None => false,
    }
}

/// Prompt for a date until it parses. An empty line cancels.
pub fn prompt_date(label: &str) -> Option<NaiveDate> {
    loop {
        let line = read_line(label)?;
        if line.is_empty() {
            return None;
        }
        match parse_date(&line) {
            Some(d) => return Some(d),
            None => warning("Please use the YYYY-MM-DD format."),
        }
    }
}

/// Prompt for a whole number of minutes until it parses. Empty line cancels.
pub fn prompt_minutes(label: &str) -> Option<u32> {
    loop {
        let line = read_line(label)?;
        if line.is_empty() {
            return None;
        }
        match line.parse::<u32>() {
            Ok(m) => return Some(m),
            Err(_) => warning("Please enter a whole number of minutes."),
        }
    }
}

/// Entry form for a new task. Returns `None` if the user cancels at the
/// date prompt (or input ends).
pub fn new_task_form() -> Option<Task> {
    let date = prompt_date("Date (YYYY-MM-DD): ")?;
    let title = read_line("Title: ")?;
    let minutes = prompt_minutes("Time spent (minutes): ")?;
    let notes = read_line("Notes: ")?;

    Some(Task::new(date, title, minutes, notes))
}

/// Edit form: each field shows its current value and keeps it when the
/// user enters a blank line.
pub fn edit_task_form(current: &Task) -> Option<Task> {
    let mut task = current.clone();

    if let Some(d) = prompt_date(&format!("Date [{}]: ", task.date_str())) {
        task.date = d;
    }

    let title = read_line(&format!("Title [{}]: ", task.title))?;
    if !title.is_empty() {
        task.title = title;
    }

    if let Some(m) = prompt_minutes(&format!("Time spent [{} min]: ", task.minutes)) {
        task.minutes = m;
    }

    let notes = read_line(&format!("Notes [{}]: ", task.notes))?;
    if !notes.is_empty() {
        task.notes = notes;
    }

    Some(task)
}
