//! The five search predicates over the task store.
//!
//! Every function takes the full ordered task slice and returns the store
//! indices of the matching tasks, in store order. Indices rather than clones:
//! a hit must map back unambiguously to its store slot so the browser can
//! edit or delete it there. Nothing here mutates the store.

use chrono::NaiveDate;
use regex::Regex;

use crate::errors::{AppError, AppResult};
use crate::models::Task;

/// All tasks logged on exactly `date`.
pub fn by_exact_date(tasks: &[Task], date: NaiveDate) -> Vec<usize> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.date == date)
        .map(|(i, _)| i)
        .collect()
}

/// All tasks with `start <= date <= end`, both ends inclusive.
/// A reversed range is rejected, never silently swapped.
pub fn by_date_range(tasks: &[Task], start: NaiveDate, end: NaiveDate) -> AppResult<Vec<usize>> {
    if start > end {
        return Err(AppError::InvalidRange {
            start: start.format("%Y-%m-%d").to_string(),
            end: end.format("%Y-%m-%d").to_string(),
        });
    }

    Ok(tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.date >= start && t.date <= end)
        .map(|(i, _)| i)
        .collect())
}

/// All tasks that took exactly `minutes`. No tolerance.
pub fn by_time_spent(tasks: &[Task], minutes: u32) -> Vec<usize> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.minutes == minutes)
        .map(|(i, _)| i)
        .collect()
}

/// Case-insensitive literal substring match over title or notes. A task is
/// reported once no matter how many fields or positions match.
pub fn by_phrase(tasks: &[Task], phrase: &str) -> Vec<usize> {
    let needle = phrase.to_lowercase();

    tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| {
            t.title.to_lowercase().contains(&needle) || t.notes.to_lowercase().contains(&needle)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Regex match over title or notes (match-anywhere, not anchored).
/// A pattern that does not compile is surfaced as InvalidPattern so the
/// interactive loop can report it and carry on.
pub fn by_pattern(tasks: &[Task], pattern: &str) -> AppResult<Vec<usize>> {
    let re = Regex::new(pattern).map_err(|e| AppError::InvalidPattern(e.to_string()))?;

    Ok(tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| re.is_match(&t.title) || re.is_match(&t.notes))
        .map(|(i, _)| i)
        .collect())
}
